//! Chat page

use maud::{html, Markup, PreEscaped};

use crate::chat::ChatSession;

use super::message::render_message;

const SUGGESTIONS: [&str; 3] = [
    "What can you help me with?",
    "Tell me about Cloudflare Workers",
    "How does this chatbot work?",
];

const SEND_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/></svg>"#;

const INPUT_STYLE: &str = r#"<style>
.message-input { padding: 24px; border-top: 1px solid #e2e8f0; background: white; }
.input-form { max-width: 800px; margin: 0 auto; }
.input-container { position: relative; display: flex; align-items: flex-end; gap: 12px; margin-bottom: 16px; }
.input-field { flex: 1; min-height: 44px; max-height: 120px; padding: 12px 16px; border: 1px solid #e2e8f0; border-radius: 12px; resize: none; font-family: inherit; font-size: 14px; line-height: 1.5; background: white; }
.input-field:focus { outline: none; border-color: #3b82f6; box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.1); }
.input-field:disabled { background: #f8fafc; color: #64748b; cursor: not-allowed; }
.send-button { width: 44px; height: 44px; background: #3b82f6; color: white; border: none; border-radius: 12px; display: flex; align-items: center; justify-content: center; cursor: pointer; flex-shrink: 0; }
.send-button:disabled { background: #94a3b8; cursor: not-allowed; }
.prompt-suggestions { display: flex; gap: 8px; flex-wrap: wrap; }
.suggestion-button { padding: 8px 12px; background: #f1f5f9; border: 1px solid #e2e8f0; border-radius: 20px; font-size: 12px; color: #64748b; cursor: pointer; }
.suggestion-button:disabled { opacity: 0.5; cursor: not-allowed; }
@media (max-width: 768px) {
  .message-input { padding: 16px; }
  .prompt-suggestions { flex-direction: column; }
  .suggestion-button { text-align: left; }
}
</style>"#;

pub fn render_chat(session: &ChatSession) -> Markup {
    let empty = session.transcript().is_empty();

    html! {
        div class="h-[calc(100vh-3rem)] flex flex-col max-w-6xl mx-auto" {
            div class="flex justify-between items-center py-6 border-b border-border mb-0" {
                div {
                    h1 class="text-3xl md:text-4xl font-bold text-foreground mb-1" { "AI Chat Assistant" }
                    p.text-muted-foreground { "Powered by Cloudflare Workers AI" }
                }
                @if !empty {
                    button type="button" class="clear-chat border rounded-lg px-4" { "Clear Chat" }
                }
            }
            div class="flex-1 bg-card border border-border rounded-2xl shadow-sm flex flex-col overflow-hidden" {
                div class="flex-1 overflow-y-auto" {
                    @if empty {
                        div class="flex-1 flex flex-col items-center justify-center text-center p-6" {
                            div class="text-6xl mb-4" { "💬" }
                            h3 class="text-2xl font-semibold text-foreground mb-2" { "Start a conversation" }
                            p.text-muted-foreground { "Send a message to begin chatting with the AI assistant." }
                        }
                    } @else {
                        div class="space-y-0" {
                            @for message in session.messages() {
                                (render_message(message))
                            }
                            @if session.is_loading() {
                                (typing_indicator())
                            }
                        }
                    }
                }
                (render_input(session.is_loading()))
            }
        }
    }
}

fn typing_indicator() -> Markup {
    html! {
        div class="flex gap-3 p-4 typing" {
            div class="w-8 h-8 rounded-full bg-muted flex items-center justify-center text-sm" { "🤖" }
            div class="flex-1 space-y-2" {
                div class="inline-block bg-muted rounded-lg px-3 py-2" {
                    div class="flex gap-1" {
                        @for delay in [0, 150, 300] {
                            div class="w-2 h-2 bg-muted-foreground rounded-full animate-bounce"
                                style={ "animation-delay: " (delay) "ms" } {}
                        }
                    }
                }
            }
        }
    }
}

fn render_input(busy: bool) -> Markup {
    html! {
        div.message-input {
            form.input-form {
                div.input-container {
                    textarea name="message" rows="1" class="input-field" placeholder="Ask me anything..." disabled[busy] {}
                    // Empty input on first render, so the send button always starts disabled.
                    button type="submit" class="send-button" disabled { (PreEscaped(SEND_ICON)) }
                }
                div.prompt-suggestions {
                    @for suggestion in SUGGESTIONS {
                        button type="button" class="suggestion-button" data-suggestion=(suggestion) disabled[busy] {
                            (suggestion)
                        }
                    }
                }
            }
            (PreEscaped(INPUT_STYLE))
        }
    }
}

//! Chat message bubble

use maud::{html, Markup, PreEscaped};

use crate::conversation::Message;

use super::markdown::render_markdown;

const COPY_ICON: &str = r#"<svg width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect width="14" height="14" x="8" y="8" rx="2" ry="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/></svg>"#;

/// Render one transcript entry.
///
/// User text is escaped and shown verbatim; assistant text goes through the
/// markdown-lite renderer unescaped.
pub fn render_message(message: &Message) -> Markup {
    let is_user = message.is_user();
    let (row, avatar, avatar_class, body, bubble, meta) = if is_user {
        (
            "flex gap-3 p-4 flex-row-reverse",
            "👤",
            "bg-primary text-primary-foreground",
            "flex-1 space-y-2 text-right",
            "bg-primary text-primary-foreground ml-auto",
            "flex items-center gap-2 text-xs text-muted-foreground justify-end",
        )
    } else {
        (
            "flex gap-3 p-4",
            "🤖",
            "bg-muted text-muted-foreground",
            "flex-1 space-y-2",
            "bg-muted text-muted-foreground",
            "flex items-center gap-2 text-xs text-muted-foreground",
        )
    };

    html! {
        div.group data-message-id=(message.id) data-role=(message.role.as_str()) {
            div class=(row) {
                div class="flex-shrink-0" {
                    div class={ "w-8 h-8 rounded-full flex items-center justify-center text-sm font-medium " (avatar_class) } {
                        (avatar)
                    }
                }
                div class=(body) {
                    div class={ "inline-block max-w-[80%] rounded-lg px-3 py-2 " (bubble) } {
                        @if is_user {
                            p class="text-sm whitespace-pre-wrap" { (message.content) }
                        } @else {
                            div class="prose prose-sm max-w-none text-sm text-muted-foreground" {
                                (PreEscaped(render_markdown(&message.content)))
                            }
                        }
                    }
                    div class=(meta) {
                        span { (message.timestamp.format("%-I:%M:%S %p").to_string()) }
                        @if !is_user {
                            button type="button"
                                class="h-6 w-6 p-0 copy-button opacity-0 group-hover:opacity-100 transition-opacity"
                                data-copy=(message.content) {
                                (PreEscaped(COPY_ICON))
                            }
                        }
                    }
                }
            }
        }
    }
}

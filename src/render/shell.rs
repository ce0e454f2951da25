//! HTML document shell

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::chat::ChatSession;

use super::chat::render_chat;
use super::home::render_home;
use super::sidebar::render_sidebar;
use super::Page;

const APP_STYLE: &str = r#"<style>
.app { min-height: 100vh; background: #f8fafc; }
.app-container { display: flex; min-height: 100vh; }
.main-content { flex: 1; padding: 24px; overflow-y: auto; }
@media (max-width: 768px) { .main-content { padding: 16px; } }
</style>"#;

/// Render the app layout (sidebar plus active page) for `path`
pub fn render_app(path: &str) -> Markup {
    let page = Page::from_path(path);

    html! {
        div.app {
            div.app-container {
                (render_sidebar(page))
                main.main-content {
                    @match page {
                        Page::Home => { (render_home()) }
                        Page::Chat => { (render_chat(&ChatSession::new())) }
                    }
                }
            }
            (PreEscaped(APP_STYLE))
        }
    }
}

fn layout(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Hassio Frontend" }
                link rel="stylesheet" href="/globals.css";
            }
            body class="bg-background text-foreground" {
                div #root { (content) }
                script { (PreEscaped("console.log('Hassio Frontend Loaded');")) }
            }
        }
    }
}

/// Render the complete HTML document for `path`
pub fn render_document(path: &str) -> String {
    layout(render_app(path)).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_document() {
        let html = render_document("/");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/globals.css">"#));
        assert!(html.contains(r#"<div id="root"><div class="app">"#));
        assert!(html.contains("Welcome to Hassio Frontend"));
        assert!(html.contains("Edge Computing"));
    }

    #[test]
    fn test_chat_document() {
        let html = render_document("/chat");
        assert!(html.contains("AI Chat Assistant"));
        assert!(html.contains("Start a conversation"));
        assert!(!html.contains("Edge Computing"));
    }

    #[test]
    fn test_unknown_path_renders_home() {
        let html = render_document("/does/not/exist");
        assert!(html.contains("AI-Powered Chat"));
        assert!(html.contains("Modern UI"));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        assert_eq!(render_document("/"), render_document("/"));
    }
}

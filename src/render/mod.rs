//! Server-side HTML rendering
//!
//! Every renderer here is a pure function of its inputs returning `maud`
//! markup. Text is escaped by `maud` unless wrapped in `PreEscaped`, and no
//! state is kept between calls.

mod chat;
mod home;
pub mod markdown;
mod message;
pub mod shell;
mod sidebar;

pub use shell::render_document;

/// Logical page identity derived from the request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Chat,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Chat];

    /// `/chat` selects the chat page; every other path falls back to home.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/chat" => Page::Chat,
            _ => Page::Home,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Chat => "/chat",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Chat => "chat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Chat => "Chat",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Chat => "💬",
        }
    }
}

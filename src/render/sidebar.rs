//! Navigation sidebar

use maud::{html, Markup, PreEscaped};

use super::Page;

const SIDEBAR_STYLE: &str = r#"<style>
.sidebar { width: 280px; background: white; border-right: 1px solid #e2e8f0; display: flex; flex-direction: column; height: 100vh; box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1); }
.sidebar-header { padding: 24px 20px; border-bottom: 1px solid #e2e8f0; }
.sidebar-header h2 { margin: 0; color: #1e293b; font-size: 20px; font-weight: 600; }
.sidebar-nav { padding: 16px 12px; flex: 1; }
.nav-item { display: flex; align-items: center; width: 100%; padding: 12px 16px; margin-bottom: 4px; border-radius: 8px; background: transparent; color: #64748b; font-size: 14px; text-decoration: none; transition: all 0.2s ease; }
.nav-item:hover { background: #f1f5f9; color: #475569; }
.nav-item.active { background: #3b82f6; color: white; }
.nav-icon { margin-right: 12px; font-size: 16px; }
.nav-label { font-weight: 500; }
@media (max-width: 768px) {
  .sidebar { width: 240px; }
  .sidebar-header { padding: 20px 16px; }
  .sidebar-nav { padding: 12px 8px; }
}
</style>"#;

pub fn render_sidebar(current: Page) -> Markup {
    html! {
        aside.sidebar {
            div.sidebar-header { h2 { "Hassio Frontend" } }
            nav.sidebar-nav {
                @for page in Page::ALL {
                    a.nav-item.active[page == current] href=(page.href()) data-page=(page.id()) {
                        span.nav-icon { (page.icon()) }
                        span.nav-label { (page.label()) }
                    }
                }
            }
            (PreEscaped(SIDEBAR_STYLE))
        }
    }
}

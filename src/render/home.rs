//! Feature showcase home page

use maud::{html, Markup, PreEscaped};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "Edge Computing",
        description: "Built on Cloudflare Workers for ultra-fast global performance",
    },
    Feature {
        icon: "🤖",
        title: "AI-Powered Chat",
        description: "Integrated with Cloudflare AI for intelligent conversations",
    },
    Feature {
        icon: "🎨",
        title: "Modern UI",
        description: "Beautiful components powered by shadcn/ui design system",
    },
    Feature {
        icon: "📱",
        title: "Responsive",
        description: "Fully responsive design that works on all devices",
    },
];

const HOME_STYLE: &str = r#"<style>
.home { max-width: 1200px; margin: 0 auto; }
.hero-section { text-align: center; padding: 48px 0; }
.hero-title { font-size: 48px; font-weight: 700; color: #1e293b; margin: 0 0 16px 0; line-height: 1.1; }
.hero-description { font-size: 20px; color: #64748b; margin: 0 auto 48px auto; max-width: 600px; line-height: 1.6; }
.feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 32px; margin-top: 64px; }
.feature-card { background: white; padding: 32px 24px; border-radius: 16px; border: 1px solid #e2e8f0; box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1); text-align: center; transition: all 0.3s ease; }
.feature-card:hover { transform: translateY(-4px); box-shadow: 0 8px 25px 0 rgba(0, 0, 0, 0.12); }
.feature-icon { font-size: 48px; margin-bottom: 16px; }
.feature-card h3 { font-size: 24px; font-weight: 600; color: #1e293b; margin: 0 0 12px 0; }
.feature-card p { font-size: 16px; color: #64748b; margin: 0; line-height: 1.5; }
@media (max-width: 768px) {
  .hero-title { font-size: 36px; }
  .hero-description { font-size: 18px; padding: 0 16px; }
  .feature-grid { grid-template-columns: 1fr; gap: 24px; margin-top: 48px; }
  .feature-card { padding: 24px 20px; }
}
</style>"#;

pub fn render_home() -> Markup {
    html! {
        div.home {
            div.hero-section {
                h1.hero-title { "Welcome to Hassio Frontend" }
                p.hero-description {
                    "A modern frontend built with React, Cloudflare Workers, and shadcn/ui components. "
                    "Experience the power of edge computing with AI-powered chat functionality."
                }
                div.feature-grid {
                    @for feature in &FEATURES {
                        div.feature-card {
                            div.feature-icon { (feature.icon) }
                            h3 { (feature.title) }
                            p { (feature.description) }
                        }
                    }
                }
            }
            (PreEscaped(HOME_STYLE))
        }
    }
}

//! Markdown-lite renderer
//!
//! Converts a small markdown subset to raw HTML with regex substitutions:
//! bold, italic, inline code, fenced code blocks and line breaks.
//!
//! The source text is NOT escaped. Any markup in the input reaches the page
//! as-is, so only feed this content that is already trusted to the same
//! degree as the rest of the page.

use std::sync::OnceLock;

use regex::Regex;

/// Any character except a line terminator (`\n`, `\r`, U+2028, U+2029)
const INLINE: &str = r"[^\n\r\x{2028}\x{2029}]";

struct Rules {
    bold: Regex,
    italic: Regex,
    inline_code: Regex,
    code_block: Regex,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| Rules {
        bold: Regex::new(&format!(r"\*\*({INLINE}*?)\*\*")).expect("bold pattern is valid"),
        italic: Regex::new(&format!(r"\*({INLINE}*?)\*")).expect("italic pattern is valid"),
        inline_code: Regex::new(&format!(r"`({INLINE}*?)`")).expect("inline code pattern is valid"),
        code_block: Regex::new(r"```([\s\S]*?)```").expect("code block pattern is valid"),
    })
}

/// Render `text` to an HTML fragment.
///
/// Order matters: bold runs before italic since both use `*`.
pub fn render_markdown(text: &str) -> String {
    let rules = rules();

    let html = rules.bold.replace_all(text, "<strong>${1}</strong>");
    let html = rules.italic.replace_all(&html, "<em>${1}</em>");
    let html = rules.inline_code.replace_all(
        &html,
        r#"<code class="bg-muted px-1 py-0.5 rounded text-sm">${1}</code>"#,
    );
    let html = rules.code_block.replace_all(
        &html,
        r#"<pre class="bg-muted p-4 rounded-md overflow-x-auto"><code>${1}</code></pre>"#,
    );

    html.replace('\n', "<br />")
}

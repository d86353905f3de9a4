use pulldown_cmark::{html, Options, Parser};

/// Renders a markdown fragment from the portfolio content to HTML.
///
/// The content is authored alongside the code, so the output is trusted.
pub fn to_html(source: &str) -> String {
    let parser = Parser::new_ext(
        source,
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION,
    );
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_inline_markup() {
        let out = to_html("Built with **Rust** and [Leptos](https://leptos.dev).");
        assert!(out.starts_with("<p>"));
        assert!(out.contains("<strong>Rust</strong>"));
        assert!(out.contains(r#"<a href="https://leptos.dev">Leptos</a>"#));
    }

    #[test]
    fn test_escapes_raw_text() {
        let out = to_html("T&C < terms");
        assert!(out.contains("T&amp;C &lt; terms"));
    }
}

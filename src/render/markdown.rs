//! Markdown to HTML conversion

use pulldown_cmark::{html, Options, Parser};

/// Convert a markdown document to an HTML fragment
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Render `code` as a fenced block tagged with `lang`.
///
/// The highlighter in the page picks up the `language-*` class.
pub fn render_code_block(code: &str, lang: &str) -> String {
    markdown_to_html(&format!("~~~{}\n{}\n~~~\n", lang, code))
}

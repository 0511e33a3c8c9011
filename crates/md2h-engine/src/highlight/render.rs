use std::borrow::Cow;

use super::{
    engine::tokenize,
    grammar::Grammar,
    token::{Segment, Token, segments},
};

/// Escapes `&`, `<`, `>`, `"` and `'` for safe embedding in HTML.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Renders a scanned source, wrapping each token in a category span.
///
/// Gap text and token text both pass through `escape`.
pub fn render_with<F>(source: &str, tokens: &[Token<'_>], escape: F) -> String
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    let mut out = String::with_capacity(source.len() * 2);
    for segment in segments(source, tokens) {
        match segment {
            Segment::Gap(text) => out.push_str(&escape(text)),
            Segment::Token(token) => {
                out.push_str("<span class=\"");
                out.push_str(token.category.class_name());
                out.push_str("\">");
                out.push_str(&escape(token.text));
                out.push_str("</span>");
            }
        }
    }
    out
}

pub fn render(source: &str, tokens: &[Token<'_>]) -> String {
    render_with(source, tokens, escape_html)
}

/// Tokenizes `source` with `grammar` and renders it as escaped, annotated HTML.
pub fn highlight_with(source: &str, grammar: &Grammar) -> String {
    let tokens = tokenize(source, grammar);
    render(source, &tokens)
}

//! # Code Highlighting
//!
//! One pattern-driven scanner shared by every supported language.
//!
//! - **`token`**: `Token`, `Category` and the gap/token `Segment` view
//! - **`grammar`**: grammar data (`GrammarDef`) and its compiled form (`Grammar`)
//! - **`grammars`**: the built-in grammars, selected by `Language`
//! - **`engine`**: `tokenize`, the ordered left-to-right scan
//! - **`render`**: escaping and span wrapping
//!
//! Scanning never fails: text no pattern matches is carried through as gap text,
//! so tokens and gaps always concatenate back to the input.

pub mod engine;
pub mod grammar;
pub mod grammars;
pub mod render;
pub mod token;

pub use engine::{scan, tokenize};
pub use grammar::{CaseSensitivity, Grammar, GrammarDef, Lookahead, PatternDef, Rule};
pub use grammars::Language;
pub use render::{escape_html, highlight_with, render, render_with};
pub use token::{Category, Segment, Token, segments};

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("invalid pattern `{pattern}` in grammar `{grammar}`: {source}")]
    InvalidPattern {
        grammar: String,
        pattern: &'static str,
        source: regex::Error,
    },
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

/// Highlights `source` with the built-in grammar for `language`.
pub fn highlight(source: &str, language: Language) -> String {
    highlight_with(source, language.grammar())
}

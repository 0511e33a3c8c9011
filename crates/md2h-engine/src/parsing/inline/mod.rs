//! # Inline Transform
//!
//! Per-line rewrite applied before block classification.
//!
//! Order is fixed: rule detection short-circuits, then bold, then italic on the
//! bold output. Bold must run first so `**x**` never reads as nested italics.
//! Links are substituted later, only for lines that end up as paragraphs.

pub mod kinds;

pub use kinds::{Emphasis, ImageRef, LinePiece, Link};

/// A source line after trimming and emphasis substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineLine {
    pub text: String,
    /// The line is a horizontal rule marker; `text` is then empty.
    pub is_rule: bool,
}

impl InlineLine {
    pub fn rule() -> Self {
        Self {
            text: String::new(),
            is_rule: true,
        }
    }
}

/// Trims `raw` and applies rule detection, bold and italic, in that order.
pub fn transform_line(raw: &str) -> InlineLine {
    let trimmed = raw.trim();
    if Emphasis::is_rule(trimmed) {
        return InlineLine::rule();
    }

    let bold = Emphasis::bold(trimmed);
    let text = Emphasis::italic(&bold).into_owned();
    InlineLine {
        text,
        is_rule: false,
    }
}

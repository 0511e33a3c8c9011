use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:_+|-+|\*+)$").expect("valid rule pattern"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").expect("valid bold pattern"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*|_(.*?)_").expect("valid italic pattern"));

/// Bold, italic and rule-line syntax.
///
/// `**x**`/`__x__` become `<b>x</b>`, `*x*`/`_x_` become `<i>x</i>`, and a
/// line made only of `_`, `-` or `*` (one character repeated) is a rule.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_OPEN: &'static str = "<b>";
    pub const BOLD_CLOSE: &'static str = "</b>";
    pub const ITALIC_OPEN: &'static str = "<i>";
    pub const ITALIC_CLOSE: &'static str = "</i>";

    /// Whether an already trimmed line is a horizontal rule marker.
    pub fn is_rule(line: &str) -> bool {
        RULE.is_match(line)
    }

    pub fn bold(text: &str) -> Cow<'_, str> {
        BOLD.replace_all(text, |caps: &Captures<'_>| {
            wrap(caps, Self::BOLD_OPEN, Self::BOLD_CLOSE)
        })
    }

    pub fn italic(text: &str) -> Cow<'_, str> {
        ITALIC.replace_all(text, |caps: &Captures<'_>| {
            wrap(caps, Self::ITALIC_OPEN, Self::ITALIC_CLOSE)
        })
    }
}

/// Wraps whichever of the two alternative groups participated in the match.
fn wrap(caps: &Captures<'_>, open: &str, close: &str) -> String {
    let inner = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str());
    format!("{open}{inner}{close}")
}

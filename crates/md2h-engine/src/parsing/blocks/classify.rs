use crate::parsing::inline::InlineLine;

use super::kinds::{BlockQuote, CodeFence, FenceKind, Heading, ListItem, TableRow};

/// What a transformed line opens or continues, borrowing its text.
///
/// This is phase 1 of block parsing: each line is classified on its own,
/// without reference to the block state around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Rule,
    /// Item text with the marker stripped.
    ListItem(&'a str),
    Heading { level: u8, text: &'a str },
    Fence(FenceKind),
    /// Quote text with the marker stripped.
    Quote(&'a str),
    /// Whole row, pipes included.
    TableRow(&'a str),
    Text(&'a str),
}

/// Classifies transformed lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// First match wins: rule, list item, heading, fence, quote, table row, text.
    pub fn classify<'a>(&self, line: &'a InlineLine) -> LineClass<'a> {
        if line.is_rule {
            return LineClass::Rule;
        }
        let text = line.text.as_str();

        if let Some(item) = ListItem::strip_marker(text) {
            LineClass::ListItem(item)
        } else if let Some((level, heading)) = Heading::parse(text) {
            LineClass::Heading {
                level,
                text: heading,
            }
        } else if let Some(kind) = CodeFence::sig(text) {
            LineClass::Fence(kind)
        } else if let Some(quote) = BlockQuote::strip_marker(text) {
            LineClass::Quote(quote)
        } else if TableRow::is_row(text) {
            LineClass::TableRow(text)
        } else {
            LineClass::Text(text)
        }
    }
}

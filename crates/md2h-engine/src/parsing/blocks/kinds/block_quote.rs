/// Block quote type with owned delimiter constant.
///
/// A quote is a single line; consecutive quote lines stay separate blocks.
pub struct BlockQuote;

impl BlockQuote {
    /// The block quote prefix character.
    pub const PREFIX: char = '>';

    /// Text after the leading `>`, trimmed. `None` when the line is not a quote.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}

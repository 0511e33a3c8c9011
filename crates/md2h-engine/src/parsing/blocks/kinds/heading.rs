/// ATX headings, levels 1 to 3.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 3;

    /// Level and trimmed text of a heading line.
    ///
    /// The marker run must be followed by whitespace or end of line, so
    /// `#tag` and `#### deep` are not headings.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let run = line.len() - rest.len();
        if run == 0 || run > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let level = u8::try_from(run).ok()?;
        Some((level, rest.trim()))
    }
}

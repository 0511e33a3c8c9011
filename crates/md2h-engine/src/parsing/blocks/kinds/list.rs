/// Unordered list items marked with `*` or `-`.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [char; 2] = ['*', '-'];

    /// Item text with the marker removed and the remainder trimmed.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKERS).map(str::trim)
    }
}

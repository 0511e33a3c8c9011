use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|(-+)(\|(-+))*\|$").expect("valid separator pattern"));

/// Pipe tables: `|a|b|` rows with an optional `|---|---|` separator.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    pub fn is_row(line: &str) -> bool {
        line.starts_with(Self::PIPE)
    }

    /// Whether the row separates the header from the data rows.
    pub fn is_separator(line: &str) -> bool {
        SEPARATOR.is_match(line)
    }

    /// Trimmed non-empty fields of a row.
    pub fn cells(line: &str) -> Vec<String> {
        line.split(Self::PIPE)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("|---|---|", true)]
    #[case("|-|", true)]
    #[case("|---|", true)]
    #[case("|:--|---|", false)]
    #[case("|---|---", false)]
    #[case("|a|b|", false)]
    fn detect_separator(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TableRow::is_separator(line), expected);
    }

    #[test]
    fn cells_are_trimmed() {
        assert_eq!(TableRow::cells("| H1 | H2 |"), vec!["H1", "H2"]);
    }

    #[test]
    fn empty_cells_are_dropped() {
        assert_eq!(TableRow::cells("|a||b|  |"), vec!["a", "b"]);
    }

    #[test]
    fn only_pipe_prefixed_lines_are_rows() {
        assert!(TableRow::is_row("|x|"));
        assert!(!TableRow::is_row(" x |"));
    }
}

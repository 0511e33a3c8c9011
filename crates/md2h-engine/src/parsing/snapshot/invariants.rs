use crate::parsing::blocks::Block;

/// Validates parser output invariants.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[Block]) {
    for (i, block) in blocks.iter().enumerate() {
        match block {
            Block::Heading { level, text } => {
                assert!(
                    (1..=3).contains(level),
                    "block {i}: heading level {level} out of range"
                );
                assert_single_line(i, text);
            }
            Block::Paragraph { text } | Block::BlockQuote { text } => assert_single_line(i, text),
            Block::UnorderedList { items } => {
                assert!(!items.is_empty(), "block {i}: empty list");
                items.iter().for_each(|item| assert_single_line(i, item));
            }
            Block::CodeBlock { source, .. } => assert!(
                source.is_empty() || source.ends_with('\n'),
                "block {i}: code source not line-terminated: {source:?}"
            ),
            Block::Table { header, rows } => {
                for cell in header.iter().chain(rows.iter().flatten()) {
                    assert!(
                        !cell.is_empty() && !cell.contains('|'),
                        "block {i}: bad table cell {cell:?}"
                    );
                }
            }
            Block::OrderedList { .. }
            | Block::DefinitionList { .. }
            | Block::HorizontalRule
            | Block::Image { .. } => {}
        }
    }
}

fn assert_single_line(i: usize, text: &str) {
    assert!(
        !text.contains('\n'),
        "block {i}: text spans lines: {text:?}"
    );
}

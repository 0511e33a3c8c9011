pub mod blocks;
pub mod cursor;
pub mod inline;
pub mod snapshot;


use xi_rope::Rope;

use crate::highlight::Language;
use blocks::{Block, BlockBuilder};
use cursor::LineCursor;

/// Parser settings shared by every document in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Grammar used for every fenced code block.
    pub code_language: Language,
}

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

pub fn parse_document(rope: &Rope, options: &ParseOptions) -> ParsedDoc {
    parse_lines(LineCursor::from_rope(rope), options)
}

/// Convenience: parse an in-memory string.
pub fn parse_str(text: &str, options: &ParseOptions) -> ParsedDoc {
    parse_lines(LineCursor::from_text(text), options)
}

fn parse_lines(mut cursor: LineCursor<'_>, options: &ParseOptions) -> ParsedDoc {
    let mut builder = BlockBuilder::new(options.code_language);
    while cursor.advance() {
        builder.push(cursor.current());
    }

    let blocks = builder.finish();
    log::trace!(
        "parsed {} lines into {} blocks",
        cursor.line_number(),
        blocks.len()
    );
    ParsedDoc { blocks }
}

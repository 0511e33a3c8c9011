use crate::parsing::blocks::Block;

/// One line per block: the block kind followed by its payload.
///
/// Code blocks show their raw source with escaped newlines, not the
/// highlighted markup, so snapshots stay readable.
pub fn outline(blocks: &[Block]) -> String {
    blocks.iter().map(line).collect::<Vec<_>>().join("\n")
}

fn line(block: &Block) -> String {
    let kind = block.kind_name();
    match block {
        Block::Heading { level, text } => format!("h{level} {text:?}"),
        Block::Paragraph { text } | Block::BlockQuote { text } => format!("{kind} {text:?}"),
        Block::UnorderedList { items } => format!("{kind} {items:?}"),
        Block::OrderedList { title, items } => format!("{kind} {title:?} {items:?}"),
        Block::DefinitionList { title, pairs } => format!("{kind} {title:?} {pairs:?}"),
        Block::CodeBlock {
            source, language, ..
        } => format!("{kind} {language} {source:?}"),
        Block::Table { header, rows } => format!("{kind} {header:?} {rows:?}"),
        Block::HorizontalRule => kind.to_owned(),
        Block::Image { alt, path } => format!("{kind} {alt:?} {path:?}"),
    }
}

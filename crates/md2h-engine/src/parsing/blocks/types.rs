use crate::highlight::Language;

/// A parsed document block, in reading order.
///
/// Text fields carry the inline markup produced by the inline transform
/// (`<b>`, `<i>`, `<a>`); they are not escaped again when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// 1 to 3.
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    UnorderedList {
        items: Vec<String>,
    },
    /// Never produced by the parser; available to callers assembling documents.
    OrderedList {
        title: String,
        items: Vec<String>,
    },
    /// Never produced by the parser; available to callers assembling documents.
    DefinitionList {
        title: String,
        pairs: Vec<(String, String)>,
    },
    CodeBlock {
        /// Escaped, span-annotated markup of `source`.
        highlighted: String,
        /// Fence content, one `\n`-terminated line per source line.
        source: String,
        language: Language,
    },
    BlockQuote {
        text: String,
    },
    /// Rows keep their own field counts; nothing is padded or truncated.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    HorizontalRule,
    Image {
        alt: String,
        path: String,
    },
}

impl Block {
    /// Short lowercase name of the variant, as used in outlines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::UnorderedList { .. } => "unordered-list",
            Block::OrderedList { .. } => "ordered-list",
            Block::DefinitionList { .. } => "definition-list",
            Block::CodeBlock { .. } => "code-block",
            Block::BlockQuote { .. } => "block-quote",
            Block::Table { .. } => "table",
            Block::HorizontalRule => "horizontal-rule",
            Block::Image { .. } => "image",
        }
    }
}

use crate::highlight::{Language, highlight};
use crate::parsing::inline::{LinePiece, Link, transform_line};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, FenceKind, TableRow},
    types::Block,
};

#[derive(Debug)]
enum LeafState {
    None,
    List {
        items: Vec<String>,
    },
    Fence {
        kind: FenceKind,
        source: String,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Line-at-a-time block state machine.
///
/// Multi-line constructs stay open while lines continue them. A line that
/// does not continue the open construct closes it and is then handled as a
/// fresh line, so nothing is lost between blocks.
pub struct BlockBuilder {
    language: Language,
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    /// Builder whose code fences are highlighted with `language`.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, raw: &str) {
        if let LeafState::Fence { kind, source } = &mut self.leaf {
            if !CodeFence::closes(*kind, raw) {
                source.push_str(raw);
                source.push('\n');
                return;
            }
            self.flush_leaf();
            return;
        }

        let line = transform_line(raw);
        let class = MarkdownLineClassifier.classify(&line);

        if self.continue_leaf(class) {
            return;
        }
        self.flush_leaf();
        self.open(class);
    }

    pub fn finish(mut self) -> Vec<Block> {
        if let LeafState::Fence { source, .. } = &self.leaf {
            log::debug!(
                "code fence left open at end of input ({} bytes)",
                source.len()
            );
        }
        self.flush_leaf();
        self.out
    }

    fn continue_leaf(&mut self, class: LineClass<'_>) -> bool {
        match (&mut self.leaf, class) {
            (LeafState::List { items }, LineClass::ListItem(item)) => {
                items.push(item.to_owned());
                true
            }
            (LeafState::Table { header, rows }, LineClass::TableRow(row)) => {
                push_row(header, rows, row);
                true
            }
            _ => false,
        }
    }

    fn open(&mut self, class: LineClass<'_>) {
        match class {
            LineClass::Rule => self.out.push(Block::HorizontalRule),
            LineClass::ListItem(item) => {
                self.leaf = LeafState::List {
                    items: vec![item.to_owned()],
                };
            }
            LineClass::Heading { level, text } => self.out.push(Block::Heading {
                level,
                text: text.to_owned(),
            }),
            LineClass::Fence(kind) => {
                self.leaf = LeafState::Fence {
                    kind,
                    source: String::new(),
                };
            }
            LineClass::Quote(text) => self.out.push(Block::BlockQuote {
                text: text.to_owned(),
            }),
            LineClass::TableRow(row) => {
                let mut header = vec![];
                let mut rows = vec![];
                push_row(&mut header, &mut rows, row);
                self.leaf = LeafState::Table { header, rows };
            }
            LineClass::Text(text) => self.push_text(text),
        }
    }

    /// Image lines keep their surrounding text as paragraphs around the images.
    fn push_text(&mut self, text: &str) {
        let Some(pieces) = Link::split_images(text) else {
            self.out.push(paragraph(text));
            return;
        };
        self.out.extend(pieces.into_iter().map(|piece| match piece {
            LinePiece::Text(text) => paragraph(text),
            LinePiece::Image(image) => Block::Image {
                alt: image.alt.to_owned(),
                path: image.path.to_owned(),
            },
        }));
    }

    fn flush_leaf(&mut self) {
        let block = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::List { items } => Block::UnorderedList { items },
            LeafState::Fence { source, .. } => Block::CodeBlock {
                highlighted: highlight(&source, self.language),
                source,
                language: self.language,
            },
            LeafState::Table { header, rows } => Block::Table { header, rows },
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph {
        text: Link::substitute(text).into_owned(),
    }
}

/// A separator promotes the last data row to the header and restarts the data rows.
fn push_row(header: &mut Vec<String>, rows: &mut Vec<Vec<String>>, row: &str) {
    if TableRow::is_separator(row) {
        if let Some(last) = rows.pop() {
            *header = last;
        }
        rows.clear();
    } else {
        rows.push(TableRow::cells(row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Vec<Block> {
        let mut builder = BlockBuilder::default();
        for line in lines {
            builder.push(line);
        }
        builder.finish()
    }

    #[test]
    fn list_stops_at_non_item_and_keeps_the_line() {
        assert_eq!(
            build(&["* a", "* b", "no marker"]),
            vec![
                Block::UnorderedList {
                    items: vec!["a".into(), "b".into()]
                },
                Block::Paragraph {
                    text: "no marker".into()
                },
            ]
        );
    }

    #[test]
    fn list_followed_by_heading_keeps_the_heading() {
        assert_eq!(
            build(&["- x", "# Next"]),
            vec![
                Block::UnorderedList {
                    items: vec!["x".into()]
                },
                Block::Heading {
                    level: 1,
                    text: "Next".into()
                },
            ]
        );
    }

    #[test]
    fn table_with_separator() {
        assert_eq!(
            build(&["|H1|H2|", "|---|---|", "|v1|v2|"]),
            vec![Block::Table {
                header: vec!["H1".into(), "H2".into()],
                rows: vec![vec!["v1".into(), "v2".into()]],
            }]
        );
    }

    #[test]
    fn table_without_separator_has_empty_header() {
        assert_eq!(
            build(&["|a|b|", "|c|"]),
            vec![Block::Table {
                header: vec![],
                rows: vec![vec!["a".into(), "b".into()], vec!["c".into()]],
            }]
        );
    }

    #[test]
    fn table_stopping_line_is_kept() {
        let blocks = build(&["|a|", "after"]);
        assert_eq!(
            blocks.last(),
            Some(&Block::Paragraph {
                text: "after".into()
            })
        );
    }

    #[test]
    fn fence_content_is_raw() {
        let blocks = build(&["```", "  **not bold**", "```"]);
        let [Block::CodeBlock { source, .. }] = blocks.as_slice() else {
            panic!("expected one code block, got {blocks:?}");
        };
        assert_eq!(source, "  **not bold**\n");
    }

    #[test]
    fn mismatched_fence_does_not_close() {
        let blocks = build(&["```", "~~~", "```", "after"]);
        assert_eq!(blocks.len(), 2);
        let Block::CodeBlock { source, .. } = &blocks[0] else {
            panic!("expected code block, got {:?}", blocks[0]);
        };
        assert_eq!(source, "~~~\n");
    }

    #[test]
    fn unterminated_fence_takes_remaining_lines() {
        let blocks = build(&["~~~", "int a;", "# not a heading"]);
        let [Block::CodeBlock { source, .. }] = blocks.as_slice() else {
            panic!("expected one code block, got {blocks:?}");
        };
        assert_eq!(source, "int a;\n# not a heading\n");
    }

    #[test]
    fn fence_is_highlighted_with_builder_language() {
        let mut builder = BlockBuilder::new(Language::JavaScript);
        for line in ["```", "let x = 1;", "```"] {
            builder.push(line);
        }
        let blocks = builder.finish();
        let [Block::CodeBlock {
            highlighted,
            language,
            ..
        }] = blocks.as_slice()
        else {
            panic!("expected one code block, got {blocks:?}");
        };
        assert_eq!(*language, Language::JavaScript);
        assert!(highlighted.starts_with(r#"<span class="kw">let</span>"#));
    }

    #[test]
    fn each_image_on_a_line_is_a_block() {
        assert_eq!(
            build(&["![a](x/1.png)![b](2.png)"]),
            vec![
                Block::Image {
                    alt: "a".into(),
                    path: "x/1.png".into()
                },
                Block::Image {
                    alt: "b".into(),
                    path: "2.png".into()
                },
            ]
        );
    }

    #[test]
    fn image_line_keeps_surrounding_text() {
        assert_eq!(
            build(&["See ![diagram](d.png) for the [flow](flow.html)"]),
            vec![
                Block::Paragraph {
                    text: "See".into()
                },
                Block::Image {
                    alt: "diagram".into(),
                    path: "d.png".into()
                },
                Block::Paragraph {
                    text: r#"for the <a href="flow.html">flow</a>"#.into()
                },
            ]
        );
    }

    #[test]
    fn blank_line_is_empty_paragraph() {
        assert_eq!(
            build(&[""]),
            vec![Block::Paragraph {
                text: String::new()
            }]
        );
    }

    #[test]
    fn paragraph_links_become_anchors() {
        assert_eq!(
            build(&["read [this](a.html)"]),
            vec![Block::Paragraph {
                text: r#"read <a href="a.html">this</a>"#.into()
            }]
        );
    }
}

use std::fmt;

/// Semantic category of a highlighted token.
///
/// Each category maps to a short CSS class used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    BuiltinType,
    Number,
    String,
    Template,
    Decorator,
    Comment,
    Punctuation,
    Plain,
}

impl Category {
    /// CSS class emitted for this category.
    pub const fn class_name(self) -> &'static str {
        match self {
            Category::Keyword => "kw",
            Category::BuiltinType => "type",
            Category::Number => "num",
            Category::String => "str",
            Category::Template => "tmpl",
            Category::Decorator => "dec",
            Category::Comment => "cm",
            Category::Punctuation => "pun",
            Category::Plain => "pln",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A classified slice of the scanned source.
///
/// `start..end` is a byte range into the source; `text` borrows exactly that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub category: Category,
    pub text: &'src str,
    pub start: usize,
    pub end: usize,
}

/// One piece of a scanned source: either verbatim gap text or a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'src> {
    Gap(&'src str),
    Token(Token<'src>),
}

impl<'src> Segment<'src> {
    pub fn text(&self) -> &'src str {
        match self {
            Segment::Gap(text) => text,
            Segment::Token(token) => token.text,
        }
    }
}

/// Interleaves `tokens` with the gap text around them.
///
/// Concatenating the text of every yielded segment reproduces `source`.
/// `tokens` must come from a scan of the same `source`.
pub fn segments<'src>(source: &'src str, tokens: &[Token<'src>]) -> Vec<Segment<'src>> {
    let mut out = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut last = 0usize;

    for token in tokens {
        if token.start > last {
            out.push(Segment::Gap(&source[last..token.start]));
        }
        out.push(Segment::Token(*token));
        last = token.end;
    }

    if last < source.len() {
        out.push(Segment::Gap(&source[last..]));
    }
    out
}

//! Markup grammar. Tags are punctuation, bare attribute names are keywords.

use crate::highlight::{
    grammar::{CaseSensitivity, GrammarDef, Lookahead, PatternDef, Rule},
    token::Category,
};

pub(super) const DEFINITION: GrammarDef = GrammarDef {
    name: "html",
    aliases: &["htm", "xml"],
    patterns: &[
        PatternDef::new("comment", Rule::Fixed(Category::Comment), r"<!--[\s\S]*?-->"),
        PatternDef::new(
            "tag",
            Rule::Fixed(Category::Punctuation),
            r"</?[a-zA-Z][a-zA-Z0-9\-]*(?:\s+[^>]*)?>",
        ),
        PatternDef::new(
            "attribute",
            Rule::Fixed(Category::Keyword),
            r"\b[a-zA-Z\-][a-zA-Z0-9\-]*",
        )
        .followed_by(Lookahead::Requires(r"\s*=")),
        PatternDef::new("string", Rule::Fixed(Category::String), r#""[^"]*"|'[^']*'"#),
        PatternDef::new(
            "entity",
            Rule::Fixed(Category::Number),
            r"&[a-zA-Z][a-zA-Z0-9]*;",
        ),
        PatternDef::new(
            "numeric-entity",
            Rule::Fixed(Category::Number),
            r"&#[0-9]+;|&#[xX][0-9a-fA-F]+;",
        ),
    ],
    keywords: &[],
    builtin_types: &[],
    case: CaseSensitivity::Sensitive,
};

//! Stylesheet grammar.
//!
//! Property names are the only classified identifiers and are matched against
//! the property table without regard to case. Selectors stay plain text.

use crate::highlight::{
    grammar::{CaseSensitivity, GrammarDef, Lookahead, PatternDef, Rule},
    token::Category,
};

pub(super) const DEFINITION: GrammarDef = GrammarDef {
    name: "css",
    aliases: &["scss", "stylesheet"],
    patterns: &[
        PatternDef::new("comment", Rule::Fixed(Category::Comment), r"/\*[\s\S]*?\*/"),
        PatternDef::new(
            "hex-color",
            Rule::Fixed(Category::Number),
            r"#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})\b",
        ),
        PatternDef::new(
            "rgb-color",
            Rule::Fixed(Category::Number),
            r"rgba?\s*\([^)]*\)",
        ),
        PatternDef::new("property", Rule::Identifier, r"\b[a-z\-]+")
            .followed_by(Lookahead::Requires(r"\s*:")),
        PatternDef::new("string", Rule::Fixed(Category::String), r#""[^"]*"|'[^']*'"#),
        PatternDef::new(
            "dimension",
            Rule::Fixed(Category::Number),
            r"\b\d+(?:\.\d+)?(?:px|em|rem|%|ch|cm|mm|in|pt|pc|vh|vw|vmin|vmax|deg|rad|turn|s|ms|hz|khz)?",
        )
        // A rejected match is retried one character on, not shortened, so `12pxa` yields nothing.
        .followed_by(Lookahead::Forbids(r"[a-z\-]")),
        PatternDef::new("number", Rule::Fixed(Category::Number), r"\b\d+(?:\.\d+)?\b"),
    ],
    keywords: &[
        // layout
        "display", "position", "float", "clear", "width", "height", "top", "right", "bottom",
        "left", "z-index",
        // box
        "margin", "margin-top", "margin-right", "margin-bottom", "margin-left", "padding",
        "padding-top", "padding-right", "padding-bottom", "padding-left", "border",
        "border-top", "border-right", "border-bottom", "border-left", "border-width",
        "border-style", "border-color", "border-radius", "box-sizing", "box-shadow",
        "overflow", "overflow-x", "overflow-y",
        // background
        "background", "background-color", "background-image", "background-position",
        "background-size", "background-repeat", "background-attachment",
        // text
        "color", "font", "font-family", "font-size", "font-weight", "font-style",
        "text-align", "text-decoration", "text-transform", "text-shadow", "line-height",
        "letter-spacing", "word-spacing",
        // flexbox and grid
        "flex", "flex-direction", "flex-wrap", "justify-content", "align-items",
        "align-content", "flex-grow", "flex-shrink", "flex-basis", "grid",
        "grid-template-columns", "grid-template-rows", "grid-gap", "grid-column", "grid-row",
        "grid-area",
        // effects
        "transform", "transition", "animation", "opacity", "visibility",
        // misc
        "content", "cursor", "list-style", "outline", "appearance", "min-width", "max-width",
        "min-height", "max-height", "vertical-align", "white-space", "word-wrap", "word-break",
    ],
    builtin_types: &[],
    case: CaseSensitivity::Insensitive,
};

//! Typed-script grammar: TypeScript with decorators, as used by Angular sources.

use crate::highlight::{
    grammar::{CaseSensitivity, GrammarDef, PatternDef, Rule},
    token::Category,
};

pub(super) const DEFINITION: GrammarDef = GrammarDef {
    name: "typescript",
    aliases: &["ts", "tsx", "angular"],
    patterns: &[
        PatternDef::new("comment", Rule::Fixed(Category::Comment), r"//[^\r\n]*"),
        PatternDef::new(
            "block-comment",
            Rule::Fixed(Category::Comment),
            r"/\*[\s\S]*?\*/",
        ),
        PatternDef::new("template", Rule::Fixed(Category::Template), r"`(?:\\.|[^\\`])*`"),
        PatternDef::new(
            "string",
            Rule::Fixed(Category::String),
            r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#,
        ),
        PatternDef::new(
            "decorator",
            Rule::Fixed(Category::Decorator),
            r"@[$A-Za-z_][$A-Za-z0-9_]*",
        ),
        PatternDef::new(
            "number",
            Rule::Fixed(Category::Number),
            r"\b0[xX][0-9A-Fa-f]+n?\b|\b0[bB][01]+n?\b|\b0[oO][0-7]+n?\b|\b\d+(?:_\d+)*(?:\.\d+(?:_\d+)*)?(?:[eE][+-]?\d+)?n?\b",
        ),
        PatternDef::new("identifier", Rule::Identifier, r"\b[$A-Za-z_][$A-Za-z0-9_]*\b"),
        PatternDef::new(
            "punctuation",
            Rule::Fixed(Category::Punctuation),
            r"[{}()\[\];.,:?~!%^&|+\-*/=<>@]",
        ),
    ],
    keywords: &[
        "import", "export", "from", "as", "default", "class", "interface", "enum", "type",
        "extends", "implements", "abstract", "declare", "public", "private", "protected",
        "readonly", "static", "override", "function", "constructor", "return", "if", "else",
        "switch", "case", "for", "while", "do", "break", "continue", "throw", "try", "catch",
        "finally", "let", "const", "var", "new", "this", "super", "true", "false", "null",
        "undefined", "typeof", "instanceof", "void", "delete", "yield", "await", "async", "in",
        "of", "namespace", "module",
    ],
    builtin_types: &[
        "string", "number", "boolean", "bigint", "symbol", "object", "any", "console",
        "unknown", "never", "void", "null", "undefined",
    ],
    case: CaseSensitivity::Sensitive,
};

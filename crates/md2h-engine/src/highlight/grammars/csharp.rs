//! Procedural grammar modelled on C#.

use crate::highlight::{
    grammar::{CaseSensitivity, GrammarDef, PatternDef, Rule},
    token::Category,
};

pub(super) const DEFINITION: GrammarDef = GrammarDef {
    name: "csharp",
    aliases: &["cs", "c#"],
    patterns: &[
        PatternDef::new("comment", Rule::Fixed(Category::Comment), r"//[^\r\n]*"),
        PatternDef::new(
            "block-comment",
            Rule::Fixed(Category::Comment),
            r"/\*[\s\S]*?\*/",
        ),
        // Regular and verbatim strings; `""` is an escaped quote inside verbatim strings.
        PatternDef::new("string", Rule::Fixed(Category::String), r#"@?"(?:[^"]|"")*""#),
        PatternDef::new("char", Rule::Fixed(Category::String), r"'(?:\\.|[^'\\])'"),
        PatternDef::new("number", Rule::Fixed(Category::Number), r"\b\d+(?:\.\d+)?\b"),
        PatternDef::new("identifier", Rule::Identifier, r"\b[_A-Za-z][_A-Za-z0-9]*\b"),
        PatternDef::new(
            "punctuation",
            Rule::Fixed(Category::Punctuation),
            r"[{}()\[\];.,:+\-*/%&|^!~?<>=]",
        ),
    ],
    keywords: &[
        "namespace", "using", "class", "struct", "enum", "interface", "public", "private",
        "protected", "internal", "static", "readonly", "const", "new", "return", "void", "var",
        "this", "base", "if", "else", "switch", "case", "default", "for", "foreach", "while",
        "do", "break", "continue", "try", "catch", "finally", "throw", "true", "false", "null",
        "in", "out", "ref", "params", "yield", "async", "await", "operator", "implicit",
        "explicit", "partial", "record",
    ],
    builtin_types: &[
        "bool", "byte", "sbyte", "short", "ushort", "int", "uint", "long", "ulong", "float",
        "double", "decimal", "char", "string", "object",
    ],
    case: CaseSensitivity::Sensitive,
};

//! Script grammar modelled on modern JavaScript.

use crate::highlight::{
    grammar::{CaseSensitivity, GrammarDef, PatternDef, Rule},
    token::Category,
};

pub(super) const DEFINITION: GrammarDef = GrammarDef {
    name: "javascript",
    aliases: &["js", "mjs", "jsx"],
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
        // Heuristic: a slash-delimited run on one line. Division between two
        // slashes on the same line is misread as a regex literal.
        PatternDef::new(
            "regex",
            Rule::Fixed(Category::Punctuation),
            r"/(?:[^/\\\r\n]|\\.)+/[gimsuvy]*",
        ),
        PatternDef::new(
            "number",
            Rule::Fixed(Category::Number),
            r"\b(?:0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\b",
        ),
        PatternDef::new("identifier", Rule::Identifier, r"\b[_$A-Za-z][_$A-Za-z0-9]*\b"),
        PatternDef::new(
            "punctuation",
            Rule::Fixed(Category::Punctuation),
            r"[{}()\[\];:,.=<>!&|^~?+\-*/%]",
        ),
    ],
    keywords: &[
        "var", "let", "const", "if", "else", "switch", "case", "default", "for", "while", "do",
        "break", "continue", "try", "catch", "finally", "throw", "function", "return", "class",
        "extends", "super", "this", "new", "delete", "typeof", "instanceof", "async", "await",
        "yield", "import", "export", "from", "as", "true", "false", "null", "undefined", "in",
        "of", "void", "static", "get", "set", "constructor", "globalThis", "BigInt",
    ],
    builtin_types: &[
        "Object", "Array", "String", "Number", "Boolean", "Symbol", "Function", "Date",
        "RegExp", "Error", "TypeError", "ReferenceError", "SyntaxError", "RangeError",
        "EvalError", "URIError", "console", "window", "document", "navigator", "location",
        "Promise", "Map", "Set", "WeakMap", "WeakSet", "ArrayBuffer", "DataView", "Int8Array",
        "Uint8Array", "Int16Array", "Uint16Array", "Int32Array", "Uint32Array",
        "Float32Array", "Float64Array", "BigInt64Array", "BigUint64Array", "JSON", "Math",
        "Reflect", "Proxy",
    ],
    case: CaseSensitivity::Sensitive,
};

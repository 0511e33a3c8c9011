//! Built-in language grammars.
//!
//! Each grammar is plain data (`GrammarDef`) compiled once on first use.

mod csharp;
mod css;
mod html;
mod javascript;
mod typescript;

use std::{fmt, str::FromStr, sync::LazyLock};

use super::{
    GrammarError,
    grammar::{Grammar, GrammarDef},
};

static CSHARP: LazyLock<Grammar> = LazyLock::new(|| builtin(&csharp::DEFINITION));
static HTML: LazyLock<Grammar> = LazyLock::new(|| builtin(&html::DEFINITION));
static CSS: LazyLock<Grammar> = LazyLock::new(|| builtin(&css::DEFINITION));
static JAVASCRIPT: LazyLock<Grammar> = LazyLock::new(|| builtin(&javascript::DEFINITION));
static TYPESCRIPT: LazyLock<Grammar> = LazyLock::new(|| builtin(&typescript::DEFINITION));

fn builtin(def: &GrammarDef) -> Grammar {
    Grammar::compile(def).expect("built-in grammar patterns are valid")
}

/// A language with a built-in grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    CSharp,
    Html,
    Css,
    JavaScript,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::CSharp,
        Language::Html,
        Language::Css,
        Language::JavaScript,
        Language::TypeScript,
    ];

    pub fn definition(self) -> &'static GrammarDef {
        match self {
            Language::CSharp => &csharp::DEFINITION,
            Language::Html => &html::DEFINITION,
            Language::Css => &css::DEFINITION,
            Language::JavaScript => &javascript::DEFINITION,
            Language::TypeScript => &typescript::DEFINITION,
        }
    }

    pub fn grammar(self) -> &'static Grammar {
        match self {
            Language::CSharp => &CSHARP,
            Language::Html => &HTML,
            Language::Css => &CSS,
            Language::JavaScript => &JAVASCRIPT,
            Language::TypeScript => &TYPESCRIPT,
        }
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = GrammarError;

    /// Looks a language up by grammar name or alias, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| {
                let def = lang.definition();
                def.name == wanted || def.aliases.iter().any(|alias| *alias == wanted)
            })
            .ok_or_else(|| GrammarError::UnknownLanguage(s.to_string()))
    }
}

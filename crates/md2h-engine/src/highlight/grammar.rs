use std::collections::HashSet;

use regex::Regex;

use super::{GrammarError, token::Category};

/// How a pattern's matches are categorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Every match gets this category.
    Fixed(Category),
    /// Matches are looked up in the grammar's classification tables.
    Identifier,
}

/// A condition on the text immediately following a match.
///
/// The regex is anchored at the end of the match. A match that fails its
/// lookahead is discarded and the pattern is retried one character later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    Requires(&'static str),
    Forbids(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

/// Uncompiled pattern data, suitable for `const` grammar tables.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub name: &'static str,
    pub rule: Rule,
    pub regex: &'static str,
    pub lookahead: Option<Lookahead>,
}

impl PatternDef {
    pub const fn new(name: &'static str, rule: Rule, regex: &'static str) -> Self {
        Self {
            name,
            rule,
            regex,
            lookahead: None,
        }
    }

    pub const fn followed_by(mut self, lookahead: Lookahead) -> Self {
        self.lookahead = Some(lookahead);
        self
    }
}

/// Uncompiled grammar data. Pattern order is significant: when two patterns
/// match at the same offset, the one listed first wins.
#[derive(Debug, Clone, Copy)]
pub struct GrammarDef {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub patterns: &'static [PatternDef],
    pub keywords: &'static [&'static str],
    pub builtin_types: &'static [&'static str],
    pub case: CaseSensitivity,
}

#[derive(Debug)]
struct Guard {
    regex: Regex,
    required: bool,
}

/// A compiled lexical pattern.
#[derive(Debug)]
pub struct Pattern {
    name: &'static str,
    rule: Rule,
    regex: Regex,
    guard: Option<Guard>,
}

impl Pattern {
    fn compile(grammar: &str, def: &PatternDef) -> Result<Self, GrammarError> {
        let invalid = |source| GrammarError::InvalidPattern {
            grammar: grammar.to_string(),
            pattern: def.name,
            source,
        };

        let regex = Regex::new(def.regex).map_err(invalid)?;
        let guard = match def.lookahead {
            None => None,
            Some(Lookahead::Requires(re)) => Some(Guard {
                regex: Regex::new(&format!("^(?:{re})")).map_err(invalid)?,
                required: true,
            }),
            Some(Lookahead::Forbids(re)) => Some(Guard {
                regex: Regex::new(&format!("^(?:{re})")).map_err(invalid)?,
                required: false,
            }),
        };

        Ok(Self {
            name: def.name,
            rule: def.rule,
            regex,
            guard,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Finds the leftmost non-empty match starting at or after `from` that
    /// satisfies the lookahead, returning its byte range.
    pub fn find_at(&self, source: &str, from: usize) -> Option<(usize, usize)> {
        let mut at = from;
        while at <= source.len() {
            let m = self.regex.find_at(source, at)?;
            if m.end() > m.start() && self.allows(&source[m.end()..]) {
                return Some((m.start(), m.end()));
            }
            at = m.start() + source[m.start()..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }

    fn allows(&self, rest: &str) -> bool {
        match &self.guard {
            None => true,
            Some(guard) => guard.regex.is_match(rest) == guard.required,
        }
    }
}

/// A compiled language grammar: ordered patterns plus classification tables.
#[derive(Debug)]
pub struct Grammar {
    name: &'static str,
    patterns: Vec<Pattern>,
    keywords: HashSet<String>,
    builtin_types: HashSet<String>,
    case: CaseSensitivity,
}

impl Grammar {
    pub fn compile(def: &GrammarDef) -> Result<Self, GrammarError> {
        let patterns = def
            .patterns
            .iter()
            .map(|p| Pattern::compile(def.name, p))
            .collect::<Result<Vec<_>, _>>()?;

        let fold = |words: &[&str]| -> HashSet<String> {
            words
                .iter()
                .map(|w| match def.case {
                    CaseSensitivity::Sensitive => (*w).to_string(),
                    CaseSensitivity::Insensitive => w.to_lowercase(),
                })
                .collect()
        };

        Ok(Self {
            name: def.name,
            patterns,
            keywords: fold(def.keywords),
            builtin_types: fold(def.builtin_types),
            case: def.case,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Classifies identifier text: keyword first, then built-in type, else plain.
    pub fn classify(&self, ident: &str) -> Category {
        let folded;
        let key = match self.case {
            CaseSensitivity::Sensitive => ident,
            CaseSensitivity::Insensitive => {
                folded = ident.to_lowercase();
                folded.as_str()
            }
        };

        if self.keywords.contains(key) {
            Category::Keyword
        } else if self.builtin_types.contains(key) {
            Category::BuiltinType
        } else {
            Category::Plain
        }
    }

    pub(crate) fn categorize(&self, rule: Rule, text: &str) -> Category {
        match rule {
            Rule::Fixed(category) => category,
            Rule::Identifier => self.classify(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY: GrammarDef = GrammarDef {
        name: "toy",
        aliases: &[],
        patterns: &[
            PatternDef::new("num", Rule::Fixed(Category::Number), r"\b\d+\b"),
            PatternDef::new("id", Rule::Identifier, r"\b[a-z]+\b"),
        ],
        keywords: &["let", "shared"],
        builtin_types: &["int", "shared"],
        case: CaseSensitivity::Sensitive,
    };

    #[test]
    fn keyword_wins_over_builtin_type() {
        let g = Grammar::compile(&TOY).unwrap();
        assert_eq!(g.classify("shared"), Category::Keyword);
        assert_eq!(g.classify("int"), Category::BuiltinType);
        assert_eq!(g.classify("x"), Category::Plain);
    }

    #[test]
    fn sensitive_grammar_respects_case() {
        let g = Grammar::compile(&TOY).unwrap();
        assert_eq!(g.classify("LET"), Category::Plain);
    }

    #[test]
    fn insensitive_grammar_folds_case() {
        let def = GrammarDef {
            case: CaseSensitivity::Insensitive,
            keywords: &["Color"],
            ..TOY
        };
        let g = Grammar::compile(&def).unwrap();
        assert_eq!(g.classify("COLOR"), Category::Keyword);
        assert_eq!(g.classify("color"), Category::Keyword);
    }

    #[test]
    fn invalid_regex_is_reported_with_pattern_name() {
        const BROKEN: &[PatternDef] = &[PatternDef::new("bad", Rule::Identifier, "(unclosed")];
        let def = GrammarDef {
            patterns: BROKEN,
            ..TOY
        };

        let err = Grammar::compile(&def).unwrap_err();
        assert!(matches!(
            err,
            GrammarError::InvalidPattern { pattern: "bad", .. }
        ));
        assert!(err.to_string().contains("toy"));
    }

    #[test]
    fn required_lookahead_filters_matches() {
        let def = PatternDef::new("prop", Rule::Identifier, r"\b[a-z]+")
            .followed_by(Lookahead::Requires(r"\s*:"));
        let p = Pattern::compile("test", &def).unwrap();

        assert_eq!(p.find_at("a b : c", 0), Some((2, 3)));
        assert_eq!(p.find_at("abc", 0), None);
    }

    #[test]
    fn forbidden_lookahead_filters_matches() {
        let def = PatternDef::new("num", Rule::Fixed(Category::Number), r"\b\d+(px)?")
            .followed_by(Lookahead::Forbids("[a-z]"));
        let p = Pattern::compile("test", &def).unwrap();

        assert_eq!(p.find_at("12px", 0), Some((0, 4)));
        assert_eq!(p.find_at("12pxa 7", 0), Some((6, 7)));
    }

    #[test]
    fn find_at_skips_multibyte_characters_safely() {
        let def = PatternDef::new("prop", Rule::Identifier, r"[a-zé]+")
            .followed_by(Lookahead::Requires(":"));
        let p = Pattern::compile("test", &def).unwrap();

        assert_eq!(p.find_at("éé x:", 0), Some((5, 6)));
    }
}

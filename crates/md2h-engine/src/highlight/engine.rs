use super::{
    grammar::Grammar,
    token::{Segment, Token, segments},
};

/// Scans `source` into a sequence of non-overlapping tokens.
///
/// At every position the pattern whose next match starts earliest wins; ties
/// at the same offset go to the pattern listed first in the grammar. Text not
/// covered by any match is left for the caller as gap text.
pub fn tokenize<'src>(source: &'src str, grammar: &Grammar) -> Vec<Token<'src>> {
    let patterns = grammar.patterns();
    // Next candidate match for each pattern; `None` once a pattern is exhausted.
    let mut next: Vec<Option<(usize, usize)>> =
        patterns.iter().map(|p| p.find_at(source, 0)).collect();
    let mut out = Vec::new();
    let mut pos = 0usize;

    loop {
        for (pattern, slot) in patterns.iter().zip(next.iter_mut()) {
            if let Some((start, _)) = *slot
                && start < pos
            {
                *slot = pattern.find_at(source, pos);
            }
        }

        let best = next
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.map(|(start, end)| (start, i, end)))
            .min_by_key(|&(start, i, _)| (start, i));

        let Some((start, index, end)) = best else {
            break;
        };

        let text = &source[start..end];
        out.push(Token {
            category: grammar.categorize(patterns[index].rule(), text),
            text,
            start,
            end,
        });
        pos = end;
    }

    out
}

/// Tokenizes `source` and returns tokens interleaved with gap text.
pub fn scan<'src>(source: &'src str, grammar: &Grammar) -> Vec<Segment<'src>> {
    let tokens = tokenize(source, grammar);
    segments(source, &tokens)
}

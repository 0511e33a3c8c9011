use std::borrow::Cow;

use xi_rope::Rope;

/// A forward-only cursor over a document's lines.
///
/// Line terminators are already stripped. `current()` is the most recently
/// read line; it is empty before the first `advance()` and keeps the last line
/// once the input is exhausted.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<Cow<'a, str>>,
    /// Number of lines read so far.
    read: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            read: 0,
        }
    }

    pub fn from_rope(rope: &'a Rope) -> Self {
        Self::new(rope.lines(..))
    }

    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.lines())
    }

    /// Returns the last line read, or `""` before the first advance.
    pub fn current(&self) -> &str {
        match self.read {
            0 => "",
            n => &self.lines[n - 1],
        }
    }

    /// Reads the next line. Returns false, leaving `current()` untouched, at end of input.
    pub fn advance(&mut self) -> bool {
        if self.read < self.lines.len() {
            self.read += 1;
            true
        } else {
            false
        }
    }

    /// 1-based number of the current line (0 before the first advance).
    pub fn line_number(&self) -> usize {
        self.read
    }

    pub fn is_exhausted(&self) -> bool {
        self.read >= self.lines.len()
    }
}

/// Which delimiter opened a code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn marker(self) -> &'static str {
        match self {
            FenceKind::Backticks => "```",
            FenceKind::Tildes => "~~~",
        }
    }
}

/// Fence delimiters. Text after the marker (an info string) is ignored.
pub struct CodeFence;

impl CodeFence {
    /// Fence kind of a line, ignoring surrounding whitespace.
    pub fn sig(line: &str) -> Option<FenceKind> {
        let t = line.trim();
        [FenceKind::Backticks, FenceKind::Tildes]
            .into_iter()
            .find(|kind| t.starts_with(kind.marker()))
    }

    /// Only a fence of the opening kind closes the block.
    pub fn closes(open: FenceKind, line: &str) -> bool {
        Self::sig(line) == Some(open)
    }
}

//! # Inline Kinds
//!
//! Inline constructs that own their syntax.
//!
//! - **`Emphasis`**: rule lines, `**bold**`/`__bold__`, `*italic*`/`_italic_`
//! - **`Link`**: `[text](url)` anchors and `![alt](path)` images
//!
//! The transformer and block parser call these; they never hardcode delimiters.

pub mod emphasis;
pub mod link;

pub use emphasis::Emphasis;
pub use link::{ImageRef, LinePiece, Link};

//! Block kinds that own their delimiters.
//!
//! The classifier asks these types whether a line opens a block; no marker
//! characters are hardcoded elsewhere.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use list::ListItem;
pub use table::TableRow;

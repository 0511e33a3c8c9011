//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each transformed line is classified into a
//!    `LineClass` from local facts only (rule, list marker, heading run, fence, quote, pipe)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one open
//!    multi-line construct (list, fence or table) and emits `Block`s as they close
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: block types with owned delimiters (BlockQuote, CodeFence, Heading, ListItem, TableRow)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: lines inside skip the inline transform
//! - Only a fence of the opening kind closes a fence
//! - Unterminated constructs close at end of input

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::Block;

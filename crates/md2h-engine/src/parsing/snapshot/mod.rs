//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! - **`outline`**: Renders parsed blocks as one stable line per block for `insta`
//!   inline snapshots
//! - **`invariants`**: Runtime checks for parser output (heading levels in range,
//!   code source line-terminated, single-line block text)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;

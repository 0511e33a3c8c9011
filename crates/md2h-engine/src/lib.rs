//! Markdown to annotated HTML.
//!
//! - [`parsing`]: line-oriented block parser with inline bold/italic/link transforms
//! - [`highlight`]: grammar-driven tokenizer and HTML highlight renderer
//! - [`html`]: page assembly
//! - [`site`]: whole-directory conversion on top of [`io`]

pub mod highlight;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod site;


// Re-export key types for easier usage
pub use highlight::{GrammarError, Language, highlight};
pub use html::{Page, PathContext, render_block, render_page};
pub use io::*;
pub use models::{markdown_file::*, toc::*};
pub use parsing::{ParseOptions, ParsedDoc, blocks::Block, parse_document, parse_str};
pub use site::{BuildReport, SiteBuilder, SiteError, SiteOptions};

//! # Document Assembly
//!
//! Turns parsed blocks into page markup.
//!
//! - **`block`**: one block to one HTML fragment
//! - **`page`**: full page with head, navigation aside and script link
//!
//! Output pages live in two places: the index at the source root, and content pages
//! under `{out}/Content`. [`PathContext`] carries that distinction explicitly so
//! every asset and page link is built relative to where the page is written.

pub mod block;
pub mod page;

pub use block::render_block;
pub use page::{Page, render_aside, render_page};

/// Embedded stylesheet, written to `{out}/Res/Style.css`.
pub const STYLE_CSS: &str = include_str!("../../assets/style.css");
/// Embedded script, written to `{out}/Res/JS.js`.
pub const SCRIPT_JS: &str = include_str!("../../assets/script.js");

pub const STYLE_FILE: &str = "Style.css";
pub const SCRIPT_FILE: &str = "JS.js";
pub const RES_DIR: &str = "Res";
pub const IMG_DIR: &str = "Img";
pub const CONTENT_DIR: &str = "Content";

/// Where the page being rendered is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathContext<'a> {
    /// The index page at the source root; assets live under `out_dir`.
    Index { out_dir: &'a str },
    /// A page inside `{out}/Content`.
    Content,
}

impl PathContext<'_> {
    pub fn res_dir(self) -> String {
        self.out_relative(RES_DIR)
    }

    pub fn img_dir(self) -> String {
        self.out_relative(IMG_DIR)
    }

    /// Link target of the page named `name`.
    pub fn page_href(self, name: &str) -> String {
        match self {
            PathContext::Index { out_dir } => format!("{out_dir}/{CONTENT_DIR}/{name}.html"),
            PathContext::Content => format!("{name}.html"),
        }
    }

    fn out_relative(self, dir: &str) -> String {
        match self {
            PathContext::Index { out_dir } => format!("{out_dir}/{dir}"),
            PathContext::Content => format!("../{dir}"),
        }
    }
}

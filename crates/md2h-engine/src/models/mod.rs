pub mod markdown_file;
pub mod toc;

pub use markdown_file::MarkdownFile;
pub use toc::Toc;

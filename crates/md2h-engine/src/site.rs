//! Whole-directory conversion: stage the output tree, render every document
//! into `{out}/Content`, then write the index page at the source root.

use std::collections::HashMap;
use std::path::PathBuf;

use relative_path::RelativePath;
use xi_rope::Rope;

use crate::highlight::Language;
use crate::html::{CONTENT_DIR, Page, PathContext, render_page};
use crate::io::{self, IoError, OutputLayout, ScanFilter};
use crate::models::{MarkdownFile, Toc};
use crate::parsing::{ParseOptions, parse_document};

pub const INDEX_FILE: &str = "Index.html";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to prepare output directory: {0}")]
    Stage(#[source] IoError),
    #[error("Failed to convert {path}: {source}")]
    Document { path: String, source: IoError },
    #[error(transparent)]
    Io(#[from] IoError),
}

#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Name of the output directory, created under the source root.
    pub output_dir: String,
    pub excluded_dirs: Vec<String>,
    pub skip_files: Vec<String>,
    /// Glob patterns, relative to the source root.
    pub image_patterns: Vec<String>,
    pub code_language: Language,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            output_dir: "ZOut".to_string(),
            excluded_dirs: [".git", "Content", "Res", "Img", "ZOut"]
                .map(String::from)
                .to_vec(),
            skip_files: vec!["Readme.md".to_string()],
            image_patterns: vec!["**/*.png".to_string()],
            code_language: Language::default(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Content pages written, in conversion order.
    pub pages: Vec<PathBuf>,
    pub images_copied: usize,
    /// `None` when there were no documents to convert.
    pub index: Option<PathBuf>,
    /// Documents whose page was replaced by a later document with the same name.
    pub overwritten: Vec<String>,
}

pub struct SiteBuilder {
    source_root: PathBuf,
    options: SiteOptions,
}

impl SiteBuilder {
    pub fn new(source_root: impl Into<PathBuf>, options: SiteOptions) -> Self {
        Self {
            source_root: source_root.into(),
            options,
        }
    }

    pub fn build(&self) -> Result<BuildReport, SiteError> {
        let root = self.source_root.as_path();
        io::validate_source_dir(root)?;

        let layout = OutputLayout::new(root, &self.options.output_dir);
        let images_copied = io::stage_output(root, &layout, &self.options.image_patterns)
            .map_err(SiteError::Stage)?;
        log::info!(
            "staged {} (copied {images_copied} images)",
            layout.root.display()
        );

        let excluded = self.excluded_dirs();
        let toc = io::build_toc(root, &excluded)?;
        let filter = ScanFilter {
            excluded_dirs: excluded,
            skip_files: self.options.skip_files.clone(),
        };
        let files = io::scan_markdown_files(root, &filter)?;
        log::info!("converting {} documents", files.len());

        let parse_options = ParseOptions {
            code_language: self.options.code_language,
        };
        let mut report = BuildReport {
            images_copied,
            ..BuildReport::default()
        };
        let mut last_page = None;
        let mut written: HashMap<String, &MarkdownFile> = HashMap::new();

        for file in &files {
            let page = self.load_page(file, &parse_options)?;
            let html = render_page(&page, &toc, PathContext::Content);
            let name = file.page_file_name();
            io::write_file(
                &RelativePath::new(CONTENT_DIR).join(&name),
                &layout.root,
                &html,
            )
            .map_err(|source| document_error(file, source))?;

            let target = layout.content.join(&name);
            if let Some(previous) = written.insert(name, file) {
                log::warn!(
                    "{} replaces {} at {}",
                    file.relative_path(),
                    previous.relative_path(),
                    target.display()
                );
                report.overwritten.push(previous.relative_path().to_string());
            }
            log::debug!(
                "wrote {} ({} blocks)",
                target.display(),
                page.blocks.len()
            );
            report.pages.push(target);
            last_page = Some(page);
        }

        if let Some(page) = last_page {
            report.index = Some(self.write_index(&page, &toc)?);
        } else {
            log::warn!("no markdown documents under {}", root.display());
        }
        Ok(report)
    }

    fn load_page(&self, file: &MarkdownFile, options: &ParseOptions) -> Result<Page, SiteError> {
        let text = io::read_file(file.relative_path(), &self.source_root)
            .map_err(|source| document_error(file, source))?;
        let rope = Rope::from(text.as_str());
        let doc = parse_document(&rope, options);
        Ok(Page::new(file.display_name(), doc.blocks))
    }

    /// The index page is the last converted document, linked from the source root.
    fn write_index(&self, page: &Page, toc: &Toc) -> Result<PathBuf, SiteError> {
        let ctx = PathContext::Index {
            out_dir: &self.options.output_dir,
        };
        let html = render_page(page, toc, ctx);
        io::write_file(RelativePath::new(INDEX_FILE), &self.source_root, &html)?;
        let index = self.source_root.join(INDEX_FILE);
        log::info!("wrote index {}", index.display());
        Ok(index)
    }

    /// Configured exclusions plus the output directory itself.
    fn excluded_dirs(&self) -> Vec<String> {
        let mut excluded = self.options.excluded_dirs.clone();
        if !excluded.contains(&self.options.output_dir) {
            excluded.push(self.options.output_dir.clone());
        }
        excluded
    }
}

fn document_error(file: &MarkdownFile, source: IoError) -> SiteError {
    SiteError::Document {
        path: file.relative_path().to_string(),
        source,
    }
}

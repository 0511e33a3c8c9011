use crate::html::{CONTENT_DIR, IMG_DIR, RES_DIR, SCRIPT_FILE, SCRIPT_JS, STYLE_CSS, STYLE_FILE};
use crate::models::{MarkdownFile, Toc};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
    #[error("Invalid image pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
    #[error("Image scan failed: {0}")]
    Glob(#[from] glob::GlobError),
}

/// Directory names and file names left out of a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanFilter {
    pub excluded_dirs: Vec<String>,
    pub skip_files: Vec<String>,
}

impl ScanFilter {
    fn skips_dir(&self, path: &Path) -> bool {
        name_in(path, &self.excluded_dirs)
    }

    fn skips_file(&self, path: &Path) -> bool {
        name_in(path, &self.skip_files)
    }
}

fn name_in(path: &Path, names: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| names.iter().any(|n| n == name))
}

/// Output directory tree: `{out}/Img`, `{out}/Content`, `{out}/Res`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub img: PathBuf,
    pub content: PathBuf,
    pub res: PathBuf,
}

impl OutputLayout {
    pub fn new(source_root: &Path, out_dir_name: &str) -> Self {
        let root = source_root.join(out_dir_name);
        Self {
            img: root.join(IMG_DIR),
            content: root.join(CONTENT_DIR),
            res: root.join(RES_DIR),
            root,
        }
    }
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, source_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(source_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories
pub fn write_file(
    relative_path: &RelativePath,
    root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the source root, relative to it and sorted
pub fn scan_markdown_files(
    source_root: &Path,
    filter: &ScanFilter,
) -> Result<Vec<MarkdownFile>, IoError> {
    validate_source_dir(source_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(source_root, filter, &mut files)?;
    files.sort();

    Ok(files
        .iter()
        .filter_map(|path| relative_to(path, source_root))
        .map(MarkdownFile::new)
        .collect())
}

/// Build the navigation tree from the immediate subdirectories of the source root
pub fn build_toc(source_root: &Path, excluded_dirs: &[String]) -> Result<Toc, IoError> {
    validate_source_dir(source_root)?;

    let mut toc = Toc::new();
    for dir in sorted_entries(source_root)? {
        if !dir.is_dir() || name_in(&dir, excluded_dirs) {
            continue;
        }
        let Some(folder) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        toc.add_folder(folder);

        for file in sorted_entries(&dir)? {
            if file.is_file()
                && is_markdown(&file)
                && let Some(relative) = relative_to(&file, source_root)
            {
                toc.add_file(folder, MarkdownFile::new(relative));
            }
        }
    }
    Ok(toc)
}

/// Create the output tree, write the embedded assets and copy matching images
/// flat into the image directory. Existing images are never overwritten.
///
/// Returns the number of images copied.
pub fn stage_output(
    source_root: &Path,
    layout: &OutputLayout,
    image_patterns: &[String],
) -> Result<usize, IoError> {
    for dir in [&layout.img, &layout.content, &layout.res] {
        fs::create_dir_all(dir)?;
    }
    fs::write(layout.res.join(STYLE_FILE), STYLE_CSS)?;
    fs::write(layout.res.join(SCRIPT_FILE), SCRIPT_JS)?;

    let mut copied = 0;
    for pattern in image_patterns {
        let full = source_root.join(pattern);
        let full = full.to_string_lossy();
        let paths = glob::glob(&full).map_err(|source| IoError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for path in paths {
            let path = path?;
            if !path.is_file() || path.starts_with(&layout.root) {
                continue;
            }
            let Some(name) = path.file_name() else {
                continue;
            };
            let dest = layout.img.join(name);
            if dest.exists() {
                log::debug!("image {} already staged, skipping", dest.display());
                continue;
            }
            fs::copy(&path, &dest)?;
            copied += 1;
        }
    }
    Ok(copied)
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

fn scan_directory_recursive(
    dir: &Path,
    filter: &ScanFilter,
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            if !filter.skips_dir(&path) {
                scan_directory_recursive(&path, filter, files)?;
            }
        } else if is_markdown(&path) && !filter.skips_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    Ok(entries)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

fn relative_to(path: &Path, root: &Path) -> Option<RelativePathBuf> {
    let relative = path.strip_prefix(root).ok()?;
    RelativePathBuf::from_path(relative).ok()
}

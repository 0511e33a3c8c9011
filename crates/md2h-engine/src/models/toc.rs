use std::collections::BTreeMap;

use super::MarkdownFile;

/// Navigation tree: top-level folders of the source root and their documents.
///
/// Uses BTreeMap so folders come out sorted by name; files keep insertion
/// order within a folder.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Toc {
    folders: BTreeMap<String, Vec<MarkdownFile>>,
}

impl Toc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a folder with no documents yet. Existing folders are left alone.
    pub fn add_folder(&mut self, name: impl Into<String>) {
        self.folders.entry(name.into()).or_default();
    }

    pub fn add_file(&mut self, folder: impl Into<String>, file: MarkdownFile) {
        self.folders.entry(folder.into()).or_default().push(file);
    }

    /// Folders sorted by name, each with its documents.
    pub fn folders(&self) -> impl Iterator<Item = (&str, &[MarkdownFile])> {
        self.folders
            .iter()
            .map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    /// Number of folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Total number of documents across all folders.
    pub fn file_count(&self) -> usize {
        self.folders.values().map(Vec::len).sum()
    }
}

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::FileScanner;
use crate::error::{IndexerError, Result};

/// Walks a directory tree for visible files.
///
/// Entries whose name starts with `.` are hidden: hidden files are skipped
/// and hidden directories are not descended into. The root itself is always
/// walked. Symbolic links to files are reported, links to directories are not
/// followed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

impl FileScanner for DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| IndexerError::Traversal {
                path: e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                source: e,
            })?;
            if is_file(&entry) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;

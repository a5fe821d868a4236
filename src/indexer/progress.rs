use std::collections::HashSet;

use crate::error::{IndexerError, Result};
use crate::input_file::InputFile;

/// Tracks what a pass has indexed and which previously cached files it has
/// not seen yet.
#[derive(Debug, Default)]
pub(super) struct Progress {
    removed: HashSet<InputFile>,
    indexed: HashSet<InputFile>,
}

impl Progress {
    /// Start from the module's previously cached records, all candidates for
    /// removal until seen again.
    pub(super) fn new(previous: impl IntoIterator<Item = InputFile>) -> Self {
        Self {
            removed: previous.into_iter().collect(),
            indexed: HashSet::new(),
        }
    }

    /// Record an indexed file.
    ///
    /// # Errors
    /// Returns `DuplicateIndex` if the same path was already indexed during
    /// this pass.
    pub(super) fn mark_as_indexed(&mut self, file: &InputFile) -> Result<()> {
        if self.indexed.contains(file) {
            return Err(IndexerError::DuplicateIndex {
                path: file.relative_path().to_string(),
                file_type: file.file_type(),
            });
        }
        self.removed.remove(file);
        self.indexed.insert(file.clone());
        Ok(())
    }

    pub(super) fn count(&self) -> usize {
        self.indexed.len()
    }

    /// Previously cached files that were not indexed again.
    pub(super) fn into_removed(self) -> Vec<InputFile> {
        self.removed.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;

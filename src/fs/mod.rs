mod predicate;

pub use predicate::FilePredicate;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::DEFAULT_ENCODING;
use crate::input_file::InputFile;
use crate::path_utils::normalize;

/// File-system view of one module for one analysis run.
///
/// Holds what the indexer needs to find files (base directory, explicit file
/// lists) and the records produced by the current indexing pass.
#[derive(Debug, Clone)]
pub struct ModuleFileSystem {
    module_key: String,
    base_dir: Option<PathBuf>,
    work_dir: Option<PathBuf>,
    encoding: String,
    source_files: Vec<PathBuf>,
    test_files: Vec<PathBuf>,
    submodules: Vec<String>,
    input_files: IndexMap<String, InputFile>,
}

impl ModuleFileSystem {
    #[must_use]
    pub fn new(module_key: impl Into<String>) -> Self {
        Self {
            module_key: module_key.into(),
            base_dir: None,
            work_dir: None,
            encoding: DEFAULT_ENCODING.to_string(),
            source_files: Vec::new(),
            test_files: Vec::new(),
            submodules: Vec::new(),
            input_files: IndexMap::new(),
        }
    }

    /// Set the base directory, canonicalized when it exists.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        self.base_dir =
            Some(dunce::canonicalize(base_dir).unwrap_or_else(|_| normalize(base_dir)));
        self
    }

    #[must_use]
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    #[must_use]
    pub fn with_source_files(mut self, files: Vec<PathBuf>) -> Self {
        self.source_files = files;
        self
    }

    #[must_use]
    pub fn with_test_files(mut self, files: Vec<PathBuf>) -> Self {
        self.test_files = files;
        self
    }

    #[must_use]
    pub fn with_submodules(mut self, submodules: Vec<String>) -> Self {
        self.submodules = submodules;
        self
    }

    #[must_use]
    pub fn module_key(&self) -> &str {
        &self.module_key
    }

    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    #[must_use]
    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Explicitly declared main files.
    #[must_use]
    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    /// Explicitly declared test files.
    #[must_use]
    pub fn test_files(&self) -> &[PathBuf] {
        &self.test_files
    }

    #[must_use]
    pub fn submodules(&self) -> &[String] {
        &self.submodules
    }

    /// A module grouping child modules owns no files itself.
    #[must_use]
    pub fn is_aggregator(&self) -> bool {
        !self.submodules.is_empty()
    }

    pub fn add(&mut self, file: InputFile) {
        self.input_files
            .insert(file.relative_path().to_string(), file);
    }

    /// Forget the records of a previous pass.
    pub fn clear_input_files(&mut self) {
        self.input_files.clear();
    }

    pub fn input_files(&self) -> impl Iterator<Item = &InputFile> + '_ {
        self.input_files.values()
    }

    #[must_use]
    pub fn input_file(&self, relative_path: &str) -> Option<&InputFile> {
        self.input_files.get(relative_path)
    }

    #[must_use]
    pub fn files(&self, predicate: &FilePredicate) -> Vec<&InputFile> {
        self.input_files
            .values()
            .filter(|f| predicate.apply(f))
            .collect()
    }

    /// Distinct languages of the indexed files.
    #[must_use]
    pub fn languages(&self) -> BTreeSet<&str> {
        self.input_files
            .values()
            .filter_map(InputFile::language)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.input_files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input_files.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

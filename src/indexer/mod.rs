//! One indexing pass over one module.
//!
//! A pass discovers the module's files (explicit lists or a walk of the base
//! directory), keeps those accepted by the exclusion filters, builds their
//! records, and reconciles the module's cache partition: entries not seen
//! again during the pass are evicted.

mod progress;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::InputFileCache;
use crate::error::Result;
use crate::fs::ModuleFileSystem;
use crate::input_file::{InputFileBuilder, InputFileType};
use crate::language::LanguageDetection;
use crate::path_utils::{relative_path, resolve_relative_path};
use crate::scanner::{DirectoryScanner, ExclusionFilters, FileScanner};
use crate::status::StatusDetection;

use progress::Progress;

/// Terminal state of an indexing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassState {
    /// Aggregator module: nothing read, nothing written.
    SkippedAggregator,
    Done,
}

/// Outcome of an indexing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    pub state: PassState,
    /// Records indexed during the pass.
    pub indexed: usize,
    /// Cache entries evicted because their file was not seen again.
    pub removed: usize,
}

impl IndexReport {
    const fn skipped() -> Self {
        Self {
            state: PassState::SkippedAggregator,
            indexed: 0,
            removed: 0,
        }
    }
}

/// Indexes the files of a module into its file-system view and the cache.
pub struct FileIndexer<'a> {
    exclusion_filters: ExclusionFilters,
    language_detection: &'a dyn LanguageDetection,
    status_detection: &'a dyn StatusDetection,
    scanner: DirectoryScanner,
}

impl<'a> FileIndexer<'a> {
    #[must_use]
    pub const fn new(
        exclusion_filters: ExclusionFilters,
        language_detection: &'a dyn LanguageDetection,
        status_detection: &'a dyn StatusDetection,
    ) -> Self {
        Self {
            exclusion_filters,
            language_detection,
            status_detection,
            scanner: DirectoryScanner::new(),
        }
    }

    /// Run one indexing pass of `fs`.
    ///
    /// # Errors
    /// Returns an error if a file is indexed twice (overlapping main and
    /// test patterns), if a pattern is invalid, or on I/O failure while
    /// traversing or reading files. The cache then keeps whatever was
    /// registered before the failure.
    pub fn index(
        &mut self,
        fs: &mut ModuleFileSystem,
        cache: &mut InputFileCache,
    ) -> Result<IndexReport> {
        if fs.is_aggregator() {
            debug!(module = fs.module_key(), "skipping aggregator module");
            return Ok(IndexReport::skipped());
        }

        info!(module = fs.module_key(), "Index files");
        self.exclusion_filters.prepare(fs)?;
        fs.clear_input_files();

        let mut pass = Pass {
            progress: Progress::new(cache.by_module(fs.module_key()).cloned()),
            builder: InputFileBuilder::new(fs, self.language_detection, self.status_detection),
            fs,
            cache,
        };

        if !pass.fs.source_files().is_empty() || !pass.fs.test_files().is_empty() {
            let sources = pass.fs.source_files().to_vec();
            let tests = pass.fs.test_files().to_vec();
            self.index_files(&mut pass, &sources, InputFileType::Main)?;
            self.index_files(&mut pass, &tests, InputFileType::Test)?;
        } else if let Some(base_dir) = pass.fs.base_dir().map(Path::to_path_buf) {
            self.index_directory(&mut pass, &base_dir)?;
        }

        let Pass {
            fs,
            cache,
            progress,
            ..
        } = pass;
        let indexed = progress.count();
        let removed = progress.into_removed();
        for file in &removed {
            cache.remove(fs.module_key(), file);
        }
        if !removed.is_empty() {
            debug!(module = fs.module_key(), count = removed.len(), "evicted removed files");
        }

        info!(module = fs.module_key(), "{indexed} files indexed");
        Ok(IndexReport {
            state: PassState::Done,
            indexed,
            removed: removed.len(),
        })
    }

    fn index_files(
        &self,
        pass: &mut Pass<'_, '_>,
        files: &[PathBuf],
        file_type: InputFileType,
    ) -> Result<()> {
        let Some(base_dir) = pass.fs.base_dir().map(Path::to_path_buf) else {
            warn!(
                module = pass.fs.module_key(),
                count = files.len(),
                "declared files are ignored, module has no base directory"
            );
            return Ok(());
        };

        for file in files {
            let location = if file.is_absolute() {
                file.clone()
            } else {
                base_dir.join(file)
            };
            let Some(path) = resolve_relative_path(&base_dir, &location) else {
                warn!(
                    module = pass.fs.module_key(),
                    "File '{}' is not declared in module basedir {}",
                    location.display(),
                    base_dir.display()
                );
                continue;
            };
            if self.exclusion_filters.accept(&location, &path, file_type) {
                self.index_file(pass, &location, file_type)?;
            }
        }
        Ok(())
    }

    fn index_directory(&self, pass: &mut Pass<'_, '_>, dir: &Path) -> Result<()> {
        for file in self.scanner.scan(dir)? {
            let Some(path) = relative_path(dir, &file) else {
                warn!(
                    module = pass.fs.module_key(),
                    "File '{}' is not declared in module basedir {}",
                    file.display(),
                    dir.display()
                );
                continue;
            };
            for file_type in [InputFileType::Main, InputFileType::Test] {
                if self.exclusion_filters.accept(&file, &path, file_type) {
                    self.index_file(pass, &file, file_type)?;
                }
            }
        }
        Ok(())
    }

    fn index_file(
        &self,
        pass: &mut Pass<'_, '_>,
        file: &Path,
        file_type: InputFileType,
    ) -> Result<()> {
        let Some(input_file) = pass.builder.create(file, file_type)? else {
            return Ok(());
        };
        if !self.exclusion_filters.accept_input_file(&input_file) {
            debug!(
                module = pass.fs.module_key(),
                path = input_file.relative_path(),
                "rejected by filter"
            );
            return Ok(());
        }

        pass.progress.mark_as_indexed(&input_file)?;
        pass.cache.put(pass.fs.module_key(), input_file.clone());
        pass.fs.add(input_file);
        Ok(())
    }
}

/// Mutable state of one pass.
struct Pass<'p, 'a> {
    builder: InputFileBuilder<'a>,
    fs: &'p mut ModuleFileSystem,
    cache: &'p mut InputFileCache,
    progress: Progress,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

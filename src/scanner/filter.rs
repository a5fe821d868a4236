use std::fmt;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::fs::ModuleFileSystem;
use crate::input_file::{InputFile, InputFileType};
use crate::pattern::PathPattern;

/// External acceptance predicate over built records.
///
/// Every registered filter must accept a file for it to be indexed.
pub trait InputFileFilter {
    fn accept(&self, file: &InputFile) -> bool;
}

impl<F> InputFileFilter for F
where
    F: Fn(&InputFile) -> bool,
{
    fn accept(&self, file: &InputFile) -> bool {
        self(file)
    }
}

/// Raw inclusion/exclusion pattern lists of a module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSettings {
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub test_inclusions: Vec<String>,
    pub test_exclusions: Vec<String>,
}

#[derive(Debug, Default)]
struct CompiledPatterns {
    inclusions: Vec<PathPattern>,
    exclusions: Vec<PathPattern>,
}

impl CompiledPatterns {
    fn compile(inclusions: &[String], exclusions: &[String]) -> Result<Self> {
        Ok(Self {
            inclusions: PathPattern::compile_all(inclusions)?,
            exclusions: PathPattern::compile_all(exclusions)?,
        })
    }

    fn accept(&self, file: &Path, relative_path: &str) -> bool {
        if !self.inclusions.is_empty()
            && !self
                .inclusions
                .iter()
                .any(|p| p.matches_path(file, relative_path, true))
        {
            return false;
        }
        !self
            .exclusions
            .iter()
            .any(|p| p.matches_path(file, relative_path, true))
    }
}

/// Decides which discovered files a module indexes, per file type.
pub struct ExclusionFilters {
    settings: ExclusionSettings,
    main: CompiledPatterns,
    test: CompiledPatterns,
    filters: Vec<Box<dyn InputFileFilter>>,
}

impl ExclusionFilters {
    #[must_use]
    pub fn new(settings: ExclusionSettings) -> Self {
        Self {
            settings,
            main: CompiledPatterns::default(),
            test: CompiledPatterns::default(),
            filters: Vec::new(),
        }
    }

    /// Register an external acceptance predicate.
    #[must_use]
    pub fn with_filter(mut self, filter: impl InputFileFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Compile the configured patterns for an indexing pass of `fs`.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn prepare(&mut self, fs: &ModuleFileSystem) -> Result<()> {
        let module = fs.module_key();
        log_patterns(module, "Included sources", &self.settings.inclusions);
        log_patterns(module, "Excluded sources", &self.settings.exclusions);
        log_patterns(module, "Included tests", &self.settings.test_inclusions);
        log_patterns(module, "Excluded tests", &self.settings.test_exclusions);

        self.main = CompiledPatterns::compile(&self.settings.inclusions, &self.settings.exclusions)?;
        self.test = CompiledPatterns::compile(
            &self.settings.test_inclusions,
            &self.settings.test_exclusions,
        )?;
        Ok(())
    }

    /// Whether a file passes the inclusion/exclusion patterns of `file_type`.
    ///
    /// A non-empty inclusion list is an allow-list; any matching exclusion
    /// rejects.
    #[must_use]
    pub fn accept(&self, file: &Path, relative_path: &str, file_type: InputFileType) -> bool {
        match file_type {
            InputFileType::Main => self.main.accept(file, relative_path),
            InputFileType::Test => self.test.accept(file, relative_path),
        }
    }

    /// Whether every registered external filter accepts a built record.
    #[must_use]
    pub fn accept_input_file(&self, file: &InputFile) -> bool {
        self.filters.iter().all(|f| f.accept(file))
    }

    #[must_use]
    pub fn inclusions(&self, file_type: InputFileType) -> &[PathPattern] {
        match file_type {
            InputFileType::Main => &self.main.inclusions,
            InputFileType::Test => &self.test.inclusions,
        }
    }

    #[must_use]
    pub fn exclusions(&self, file_type: InputFileType) -> &[PathPattern] {
        match file_type {
            InputFileType::Main => &self.main.exclusions,
            InputFileType::Test => &self.test.exclusions,
        }
    }
}

impl fmt::Debug for ExclusionFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusionFilters")
            .field("settings", &self.settings)
            .field("filters", &self.filters.len())
            .finish_non_exhaustive()
    }
}

fn log_patterns(module: &str, label: &str, patterns: &[String]) {
    if !patterns.is_empty() {
        info!(module, "{label}: {}", patterns.join(", "));
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

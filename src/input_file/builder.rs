use std::path::{Path, PathBuf};

use tracing::warn;

use super::{InputFile, InputFileType};
use crate::error::{IndexerError, Result};
use crate::fs::ModuleFileSystem;
use crate::language::{LanguageDetection, LanguageDetectionOutcome};
use crate::path_utils::resolve_relative_path;
use crate::status::{StatusDetection, compute_file_hash};

/// Turns files of one module into `InputFile` records.
pub struct InputFileBuilder<'a> {
    module_key: String,
    base_dir: Option<PathBuf>,
    encoding: String,
    language_detection: &'a dyn LanguageDetection,
    status_detection: &'a dyn StatusDetection,
}

impl<'a> InputFileBuilder<'a> {
    #[must_use]
    pub fn new(
        fs: &ModuleFileSystem,
        language_detection: &'a dyn LanguageDetection,
        status_detection: &'a dyn StatusDetection,
    ) -> Self {
        Self {
            module_key: fs.module_key().to_string(),
            base_dir: fs.base_dir().map(Path::to_path_buf),
            encoding: fs.encoding().to_string(),
            language_detection,
            status_detection,
        }
    }

    #[must_use]
    pub fn module_key(&self) -> &str {
        &self.module_key
    }

    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Build the record of `file`, or `None` when the file does not qualify:
    /// it lies outside the module base directory, or its language is
    /// ambiguous.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn create(&self, file: &Path, file_type: InputFileType) -> Result<Option<InputFile>> {
        let Some(base_dir) = self.base_dir.as_deref() else {
            warn!(
                module = %self.module_key,
                "File '{}' is ignored, module has no base directory",
                file.display()
            );
            return Ok(None);
        };
        let location = if file.is_absolute() {
            file.to_path_buf()
        } else {
            base_dir.join(file)
        };
        let resolved = resolve_relative_path(base_dir, &location);
        let Some(relative) = resolved else {
            warn!(
                module = %self.module_key,
                "File '{}' is not declared in module basedir {}",
                file.display(),
                base_dir.display()
            );
            return Ok(None);
        };

        let absolute = dunce::canonicalize(&location).map_err(|e| IndexerError::FileRead {
            path: location.clone(),
            source: e,
        })?;

        let language = match self.language_detection.detect(&absolute, &relative) {
            LanguageDetectionOutcome::Detected(language) => Some(language),
            LanguageDetectionOutcome::Unknown => None,
            LanguageDetectionOutcome::Conflict(languages) => {
                warn!(
                    module = %self.module_key,
                    path = %relative,
                    "Language of file '{relative}' can not be decided as it matches patterns of {}",
                    languages.join(", ")
                );
                return Ok(None);
            }
        };

        let hash = compute_file_hash(&absolute)?;
        let status = self.status_detection.status(&relative, &hash);

        Ok(Some(
            InputFile::new(relative, absolute)
                .with_type(file_type)
                .with_language(language)
                .with_status(status)
                .with_encoding(self.encoding.clone())
                .with_hash(hash),
        ))
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

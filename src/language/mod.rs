mod registry;

pub use registry::{Language, LanguageRegistry};

use std::path::Path;

use crate::error::{IndexerError, Result};
use crate::pattern::PathPattern;

/// Outcome of resolving the language of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageDetectionOutcome {
    Detected(String),
    /// No language claims the file.
    Unknown,
    /// More than one language claims the file.
    Conflict(Vec<String>),
}

/// Capability that assigns a language to a file.
pub trait LanguageDetection {
    fn detect(&self, absolute: &Path, relative: &str) -> LanguageDetectionOutcome;
}

/// Detects languages by matching file patterns, ignoring case.
#[derive(Debug, Clone)]
pub struct PatternLanguageDetection {
    languages: Vec<(String, Vec<PathPattern>)>,
    forced: Option<String>,
}

impl PatternLanguageDetection {
    /// Build detection for every language of `registry`.
    ///
    /// With a `forced` language only that language is considered, and files
    /// it does not claim get no language.
    ///
    /// # Errors
    /// Returns an error if `forced` is not registered or a language pattern
    /// is invalid.
    pub fn new(registry: &LanguageRegistry, forced: Option<&str>) -> Result<Self> {
        if let Some(name) = forced
            && registry.get(name).is_none()
        {
            return Err(IndexerError::Config(format!(
                "No language is installed with key '{name}'"
            )));
        }

        let languages = registry
            .all()
            .iter()
            .filter(|l| forced.is_none_or(|name| l.name == name))
            .map(|l| Ok((l.name.clone(), PathPattern::compile_all(&l.file_patterns())?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            languages,
            forced: forced.map(String::from),
        })
    }

    #[must_use]
    pub fn forced(&self) -> Option<&str> {
        self.forced.as_deref()
    }
}

impl LanguageDetection for PatternLanguageDetection {
    fn detect(&self, absolute: &Path, relative: &str) -> LanguageDetectionOutcome {
        let mut matching: Vec<String> = self
            .languages
            .iter()
            .filter(|(_, patterns)| {
                patterns
                    .iter()
                    .any(|p| p.matches_path(absolute, relative, false))
            })
            .map(|(name, _)| name.clone())
            .collect();

        match matching.len() {
            0 => LanguageDetectionOutcome::Unknown,
            1 => LanguageDetectionOutcome::Detected(matching.remove(0)),
            _ => LanguageDetectionOutcome::Conflict(matching),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

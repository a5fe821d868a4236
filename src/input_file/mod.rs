mod builder;

pub use builder::InputFileBuilder;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Role a file plays in analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFileType {
    Main,
    Test,
}

impl InputFileType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for InputFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change status relative to the previous snapshot of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFileStatus {
    #[default]
    Added,
    Changed,
    Same,
}

impl InputFileStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Changed => "changed",
            Self::Same => "same",
        }
    }
}

impl fmt::Display for InputFileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An indexed file of a module.
///
/// Identity is the module-relative path: two records with the same
/// `relative_path` are equal whatever their other attributes. This is what
/// makes a path accepted as both main and test collide during indexing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputFile {
    relative_path: String,
    absolute_path: PathBuf,
    #[serde(rename = "type")]
    file_type: InputFileType,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    status: InputFileStatus,
    encoding: String,
    #[serde(default)]
    hash: String,
}

impl InputFile {
    #[must_use]
    pub fn new(relative_path: impl Into<String>, absolute_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            absolute_path: absolute_path.into(),
            file_type: InputFileType::Main,
            language: None,
            status: InputFileStatus::Added,
            encoding: crate::config::DEFAULT_ENCODING.to_string(),
            hash: String::new(),
        }
    }

    #[must_use]
    pub const fn with_type(mut self, file_type: InputFileType) -> Self {
        self.file_type = file_type;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: InputFileStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Path relative to the module base directory, `/`-separated.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    #[must_use]
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    #[must_use]
    pub const fn file_type(&self) -> InputFileType {
        self.file_type
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> InputFileStatus {
        self.status
    }

    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Hex SHA-256 of the content at indexing time.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl PartialEq for InputFile {
    fn eq(&self, other: &Self) -> bool {
        self.relative_path == other.relative_path
    }
}

impl Eq for InputFile {}

impl Hash for InputFile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.relative_path.hash(state);
    }
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[relative={}, abs={}]", self.relative_path, self.absolute_path.display())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::path::PathBuf;

use thiserror::Error;

use crate::input_file::InputFileType;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to traverse directory: {path}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(
        "File '{path}' ({file_type}) can't be indexed twice. Please check that \
         inclusion/exclusion patterns produce disjoint sets for main and test files"
    )]
    DuplicateIndex {
        path: String,
        file_type: InputFileType,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl IndexerError {
    /// Whether this error reports an include/exclude configuration overlap.
    #[must_use]
    pub const fn is_duplicate_index(&self) -> bool {
        matches!(self, Self::DuplicateIndex { .. })
    }
}

pub type Result<T> = std::result::Result<T, IndexerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

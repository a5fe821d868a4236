use crate::error::Result;
use crate::input_file::{InputFile, InputFileStatus, InputFileType};
use crate::pattern::PathPattern;

/// Query over the files of a module.
#[derive(Debug, Clone)]
pub enum FilePredicate {
    All,
    Type(InputFileType),
    Language(String),
    Status(InputFileStatus),
    /// Case-sensitive path pattern.
    Pattern(PathPattern),
    And(Vec<FilePredicate>),
    Or(Vec<FilePredicate>),
    Not(Box<FilePredicate>),
}

impl FilePredicate {
    /// # Errors
    /// Returns an error if the pattern is invalid.
    pub fn matches_pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(PathPattern::compile(pattern)?))
    }

    #[must_use]
    pub fn has_language(language: &str) -> Self {
        Self::Language(language.to_string())
    }

    #[must_use]
    pub fn not(predicate: Self) -> Self {
        Self::Not(Box::new(predicate))
    }

    #[must_use]
    pub fn apply(&self, file: &InputFile) -> bool {
        match self {
            Self::All => true,
            Self::Type(file_type) => file.file_type() == *file_type,
            Self::Language(language) => file.language() == Some(language.as_str()),
            Self::Status(status) => file.status() == *status,
            Self::Pattern(pattern) => pattern.matches(file, true),
            Self::And(predicates) => predicates.iter().all(|p| p.apply(file)),
            Self::Or(predicates) => predicates.iter().any(|p| p.apply(file)),
            Self::Not(predicate) => !predicate.apply(file),
        }
    }
}

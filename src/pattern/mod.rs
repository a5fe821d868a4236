mod compiler;

use std::fmt;
use std::path::Path;

use regex::Regex;

use crate::error::{IndexerError, Result};
use crate::input_file::InputFile;
use crate::path_utils::{normalize, to_slash};

const ABSOLUTE_PREFIX: &str = "file:";

/// What a pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternAnchor {
    /// Path relative to the module base directory.
    Relative,
    /// Canonical absolute path, selected by the `file:` prefix.
    Absolute,
}

/// A compiled Ant-style path pattern (`*`, `**`, `?`).
///
/// Case-insensitive matching lower-cases both the pattern and the candidate,
/// so `matches_str(p, false)` is exactly `matches_str(lower(p), lower(path))`.
#[derive(Debug, Clone)]
pub struct PathPattern {
    text: String,
    anchor: PatternAnchor,
    case_sensitive: Regex,
    case_insensitive: Regex,
}

impl PathPattern {
    /// Compile a single pattern. A leading `file:` (any case) anchors the
    /// pattern on absolute paths.
    ///
    /// # Errors
    /// Returns an error if the translated expression cannot be compiled.
    pub fn compile(pattern: &str) -> Result<Self> {
        let trimmed = pattern.trim();
        let (anchor, glob) = match strip_prefix_ignore_case(trimmed, ABSOLUTE_PREFIX) {
            Some(rest) => (PatternAnchor::Absolute, rest),
            None => (PatternAnchor::Relative, trimmed),
        };

        let case_sensitive = build_regex(pattern, glob)?;
        let case_insensitive = build_regex(pattern, &glob.to_lowercase())?;

        Ok(Self {
            text: pattern.to_string(),
            anchor,
            case_sensitive,
            case_insensitive,
        })
    }

    /// Compile every pattern, failing on the first invalid one.
    ///
    /// # Errors
    /// Returns an error if any pattern cannot be compiled.
    pub fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Self>> {
        patterns.iter().map(|p| Self::compile(p.as_ref())).collect()
    }

    #[must_use]
    pub const fn anchor(&self) -> PatternAnchor {
        self.anchor
    }

    /// Match an indexed file.
    #[must_use]
    pub fn matches(&self, file: &InputFile, case_sensitive: bool) -> bool {
        self.matches_path(file.absolute_path(), file.relative_path(), case_sensitive)
    }

    /// Match a file known by both its absolute and module-relative forms.
    ///
    /// Absolute patterns see the canonical path: symlinks resolved, `.` and
    /// `..` removed. A file that does not exist is normalized lexically.
    #[must_use]
    pub fn matches_path(&self, absolute: &Path, relative: &str, case_sensitive: bool) -> bool {
        match self.anchor {
            PatternAnchor::Relative => self.matches_str(relative, case_sensitive),
            PatternAnchor::Absolute => {
                let canonical =
                    dunce::canonicalize(absolute).unwrap_or_else(|_| normalize(absolute));
                self.matches_str(&to_slash(&canonical), case_sensitive)
            }
        }
    }

    /// Match a raw `/`-separated candidate path, ignoring the anchor.
    #[must_use]
    pub fn matches_str(&self, candidate: &str, case_sensitive: bool) -> bool {
        let candidate = candidate.replace('\\', "/");
        if case_sensitive {
            self.case_sensitive.is_match(&candidate)
        } else {
            self.case_insensitive.is_match(&candidate.to_lowercase())
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn build_regex(pattern: &str, glob: &str) -> Result<Regex> {
    Regex::new(&compiler::glob_to_regex(glob)).map_err(|e| IndexerError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{IndexerError, Result};
use crate::input_file::{InputFile, InputFileStatus};

/// Capability that stamps a file as added, changed or unchanged relative to
/// the previous snapshot of its module.
pub trait StatusDetection {
    fn status(&self, relative_path: &str, hash: &str) -> InputFileStatus;
}

/// Compares content hashes with those recorded by the previous snapshot.
#[derive(Debug, Clone, Default)]
pub struct HashStatusDetection {
    previous: HashMap<String, String>,
}

impl HashStatusDetection {
    #[must_use]
    pub const fn new(previous: HashMap<String, String>) -> Self {
        Self { previous }
    }

    /// Use the hashes carried by previously indexed records.
    ///
    /// Records without a hash are ignored, so their files count as added.
    pub fn from_snapshot<'a>(records: impl IntoIterator<Item = &'a InputFile>) -> Self {
        let previous = records
            .into_iter()
            .filter(|f| !f.hash().is_empty())
            .map(|f| (f.relative_path().to_string(), f.hash().to_string()))
            .collect();
        Self { previous }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.previous.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }
}

impl StatusDetection for HashStatusDetection {
    fn status(&self, relative_path: &str, hash: &str) -> InputFileStatus {
        match self.previous.get(relative_path) {
            None => InputFileStatus::Added,
            Some(previous) if previous == hash => InputFileStatus::Same,
            Some(_) => InputFileStatus::Changed,
        }
    }
}

/// Compute the hex SHA-256 of a file's content.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path).map_err(|e| IndexerError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let n = file.read(&mut buffer).map_err(|e| IndexerError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

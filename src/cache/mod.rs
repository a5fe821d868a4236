use std::fs;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{IndexerError, Result};
use crate::input_file::InputFile;

const CACHE_VERSION: u32 = 1;

/// Indexed files of every module, keyed by (module key, relative path).
///
/// Module partitions are independent: nothing done to one module key touches
/// the entries of another.
///
/// Cache format:
/// ```json
/// {
///   "version": 1,
///   "modules": {
///     "struts": {
///       "src/main/java/Foo.java": { "relative_path": "...", "type": "main", ... }
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputFileCache {
    version: u32,
    modules: IndexMap<String, IndexMap<String, InputFile>>,
}

impl Default for InputFileCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InputFileCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: CACHE_VERSION,
            modules: IndexMap::new(),
        }
    }

    /// Load a cache from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| IndexerError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load the cache left by a previous run, starting empty when there is
    /// none or when it was written by an incompatible version.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no previous cache");
            return Ok(Self::new());
        }
        let cache = Self::load(path)?;
        if cache.version != CACHE_VERSION {
            warn!(
                path = %path.display(),
                found = cache.version,
                expected = CACHE_VERSION,
                "ignoring cache written by another version"
            );
            return Ok(Self::new());
        }
        Ok(cache)
    }

    /// Save the cache as JSON, replacing the target only once the content
    /// has been fully written.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| IndexerError::FileRead {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Insert or replace the entry for `(module_key, file.relative_path())`.
    pub fn put(&mut self, module_key: &str, file: InputFile) {
        self.modules
            .entry(module_key.to_string())
            .or_default()
            .insert(file.relative_path().to_string(), file);
    }

    #[must_use]
    pub fn get(&self, module_key: &str, relative_path: &str) -> Option<&InputFile> {
        self.modules.get(module_key)?.get(relative_path)
    }

    /// Records of one module.
    pub fn by_module(&self, module_key: &str) -> impl Iterator<Item = &InputFile> + '_ {
        self.modules
            .get(module_key)
            .into_iter()
            .flat_map(IndexMap::values)
    }

    /// Records of every module.
    pub fn all(&self) -> impl Iterator<Item = &InputFile> + '_ {
        self.modules.values().flat_map(IndexMap::values)
    }

    /// Remove the entry of one file of a module.
    pub fn remove(&mut self, module_key: &str, file: &InputFile) -> Option<InputFile> {
        self.modules
            .get_mut(module_key)?
            .shift_remove(file.relative_path())
    }

    /// Remove every entry of a module, returning how many were dropped.
    pub fn remove_module(&mut self, module_key: &str) -> usize {
        self.modules
            .shift_remove(module_key)
            .map_or(0, |files| files.len())
    }

    pub fn module_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.modules.keys().map(String::as_str)
    }

    /// Number of entries across all modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.values().map(IndexMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

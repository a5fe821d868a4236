use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fs::ModuleFileSystem;
use crate::scanner::ExclusionSettings;

/// Source encoding used when neither the project nor the module sets one.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Working directory of the indexer, relative to the project root.
pub const DEFAULT_WORK_DIR: &str = ".source-indexer";

/// File name of the persisted cache inside the working directory.
pub const CACHE_FILE_NAME: &str = "cache.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    /// Extra or overriding language definitions.
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,

    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    #[serde(default = "default_encoding")]
    pub encoding: String,

    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,

    /// MAIN exclusions added to every module.
    #[serde(default)]
    pub global_exclusions: Vec<String>,

    /// TEST exclusions added to every module.
    #[serde(default)]
    pub global_test_exclusions: Vec<String>,

    /// Forced language: only this language is detected.
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            work_dir: default_work_dir(),
            global_exclusions: Vec::new(),
            global_test_exclusions: Vec::new(),
            language: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
    pub name: String,

    #[serde(default)]
    pub extensions: Vec<String>,

    /// Explicit glob patterns, replacing the extension-derived ones.
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleConfig {
    pub key: String,

    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Child module keys. A module with children is an aggregator.
    #[serde(default)]
    pub modules: Vec<String>,

    /// Explicit MAIN files; when set with `tests`, no directory walk happens.
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    #[serde(default)]
    pub tests: Vec<PathBuf>,

    #[serde(default)]
    pub encoding: Option<String>,

    #[serde(default)]
    pub inclusions: Vec<String>,

    #[serde(default)]
    pub exclusions: Vec<String>,

    #[serde(default)]
    pub test_inclusions: Vec<String>,

    #[serde(default)]
    pub test_exclusions: Vec<String>,
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

fn default_work_dir() -> PathBuf {
    PathBuf::from(DEFAULT_WORK_DIR)
}

impl Config {
    #[must_use]
    pub fn module(&self, key: &str) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| m.key == key)
    }

    /// Working directory, resolved against the project `root`.
    #[must_use]
    pub fn work_dir(&self, root: &Path) -> PathBuf {
        resolve(root, &self.project.work_dir)
    }

    #[must_use]
    pub fn cache_path(&self, root: &Path) -> PathBuf {
        self.work_dir(root).join(CACHE_FILE_NAME)
    }

    /// Pattern lists of a module, with the project-wide exclusions appended.
    #[must_use]
    pub fn exclusion_settings(&self, module: &ModuleConfig) -> ExclusionSettings {
        let mut exclusions = split_patterns(&module.exclusions);
        exclusions.extend(split_patterns(&self.project.global_exclusions));
        let mut test_exclusions = split_patterns(&module.test_exclusions);
        test_exclusions.extend(split_patterns(&self.project.global_test_exclusions));

        ExclusionSettings {
            inclusions: split_patterns(&module.inclusions),
            exclusions,
            test_inclusions: split_patterns(&module.test_inclusions),
            test_exclusions,
        }
    }

    /// Build the file-system view of a module, resolving its paths against
    /// the project `root`.
    #[must_use]
    pub fn module_file_system(&self, module: &ModuleConfig, root: &Path) -> ModuleFileSystem {
        let encoding = module
            .encoding
            .clone()
            .unwrap_or_else(|| self.project.encoding.clone());
        let base_dir = module.base_dir.as_deref().map(|dir| resolve(root, dir));
        // declared files are relative to the module, not the project
        let files_root = base_dir.as_deref().unwrap_or(root);
        let fs = ModuleFileSystem::new(module.key.clone())
            .with_work_dir(self.work_dir(root).join(&module.key))
            .with_encoding(encoding)
            .with_submodules(module.modules.clone())
            .with_source_files(resolve_all(files_root, &module.sources))
            .with_test_files(resolve_all(files_root, &module.tests));

        match base_dir {
            Some(base_dir) => fs.with_base_dir(base_dir),
            None => fs,
        }
    }
}

/// Split comma-separated entries, trimming them and dropping empties.
#[must_use]
pub fn split_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|p| p.split(','))
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn resolve_all(base: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths.iter().map(|p| resolve(base, p)).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

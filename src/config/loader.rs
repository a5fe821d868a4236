use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IndexerError, Result};

use super::Config;
use super::validation::validate_config;

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".source-indexer.toml";

/// A configuration together with the directory its relative paths resolve
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// Directory of the configuration file, or the current directory when
    /// no file was found.
    pub root: PathBuf,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read, parsed or
    /// validated.
    fn load(&self) -> Result<LoadedConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadedConfig>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads configuration from the filesystem.
///
/// `load` reads `.source-indexer.toml` from the current directory and falls
/// back to `Config::default()` (no modules) when there is none.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadedConfig> {
        let current_dir = self.fs.current_dir()?;
        let path = current_dir.join(CONFIG_FILE_NAME);
        if self.fs.exists(&path) {
            return self.load_from_path(&path);
        }
        debug!(dir = %current_dir.display(), "no configuration file, using defaults");
        Ok(LoadedConfig {
            config: Config::default(),
            root: current_dir,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadedConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| IndexerError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content)?;

        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        let root = if parent.is_absolute() {
            parent.to_path_buf()
        } else {
            self.fs.current_dir()?.join(parent)
        };
        debug!(path = %path.display(), modules = config.modules.len(), "configuration loaded");
        Ok(LoadedConfig { config, root })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{ExclusionFilters, ExclusionSettings, InputFileFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return every file found, in a stable order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

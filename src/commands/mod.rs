pub mod cache;
pub mod index;

use std::path::Path;

use crate::Result;
use crate::config::{ConfigLoader, FileConfigLoader, LoadedConfig};

pub use cache::{run_cache, run_cache_clear_impl, run_cache_list_impl};
pub use index::{IndexedModule, run_index, run_index_impl};

fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let loader = FileConfigLoader::new();
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Print an error and the chain of its causes to stderr.
pub fn print_error(error: &dyn std::error::Error) {
    eprintln!("Error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

use crate::cache::InputFileCache;
use crate::cli::{CacheAction, CacheArgs};
use crate::config::LoadedConfig;
use crate::output::{ModuleListing, OutputFormat, format_listings};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{load_config, print_error};

#[must_use]
pub fn run_cache(args: &CacheArgs) -> i32 {
    let result = match &args.action {
        CacheAction::List {
            config,
            module,
            format,
        } => load_config(config.as_deref())
            .and_then(|loaded| run_cache_list_impl(&loaded, module.as_deref(), *format)),
        CacheAction::Clear { config, module } => load_config(config.as_deref())
            .and_then(|loaded| run_cache_clear_impl(&loaded, module))
            .map(|removed| format!("Removed {removed} cached files of module '{module}'\n")),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Format the cached records, of every module or of `module` only.
///
/// # Errors
/// Returns an error if the cache cannot be read or formatted.
pub fn run_cache_list_impl(
    loaded: &LoadedConfig,
    module: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let cache = InputFileCache::load_or_default(&loaded.config.cache_path(&loaded.root))?;
    let listings: Vec<_> = cache
        .module_keys()
        .filter(|key| module.is_none_or(|m| m == *key))
        .map(|key| ModuleListing::new(key, cache.by_module(key)))
        .collect();
    format_listings(&listings, format)
}

/// Drop the cached records of `module` and save the cache.
///
/// Returns how many records were dropped.
///
/// # Errors
/// Returns an error if the cache cannot be read or written.
pub fn run_cache_clear_impl(loaded: &LoadedConfig, module: &str) -> Result<usize> {
    let path = loaded.config.cache_path(&loaded.root);
    let mut cache = InputFileCache::load_or_default(&path)?;
    let removed = cache.remove_module(module);
    if removed > 0 {
        cache.save(&path)?;
    }
    Ok(removed)
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

use tracing::{debug, info, warn};

use crate::cache::InputFileCache;
use crate::cli::IndexArgs;
use crate::config::{LoadedConfig, ModuleConfig};
use crate::indexer::{FileIndexer, IndexReport};
use crate::input_file::InputFile;
use crate::language::{LanguageRegistry, PatternLanguageDetection};
use crate::output::{ModuleListing, format_listings};
use crate::scanner::ExclusionFilters;
use crate::status::HashStatusDetection;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, IndexerError, Result};

use super::{load_config, print_error};

/// Outcome of indexing one module.
#[derive(Debug, Clone)]
pub struct IndexedModule {
    pub key: String,
    pub report: IndexReport,
    pub files: Vec<InputFile>,
}

#[must_use]
pub fn run_index(args: &IndexArgs) -> i32 {
    let result = load_config(args.config.as_deref())
        .and_then(|loaded| run_index_impl(&loaded, &args.modules, args.no_cache))
        .and_then(|indexed| {
            let listings: Vec<_> = indexed
                .iter()
                .map(|m| ModuleListing::new(&m.key, &m.files).with_report(m.report))
                .collect();
            format_listings(&listings, args.format)
        });

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

/// Index the selected modules (all of them when `selected` is empty), in
/// declaration order, then persist the cache.
///
/// # Errors
/// Returns an error for an unknown module key, an unregistered forced
/// language, or any failure of an indexing pass. The cache is not saved
/// when a pass fails.
pub fn run_index_impl(
    loaded: &LoadedConfig,
    selected: &[String],
    no_cache: bool,
) -> Result<Vec<IndexedModule>> {
    let LoadedConfig { config, root } = loaded;
    let modules = select_modules(loaded, selected)?;
    if modules.is_empty() {
        warn!("No modules configured in {}", root.display());
    }

    let cache_path = config.cache_path(root);
    let mut cache = if no_cache {
        InputFileCache::new()
    } else {
        InputFileCache::load_or_default(&cache_path)?
    };

    let registry = LanguageRegistry::with_custom_languages(&config.languages);
    let languages = PatternLanguageDetection::new(&registry, config.project.language.as_deref())?;
    if let Some(forced) = languages.forced() {
        debug!(language = forced, "language forced for all files");
    }

    let mut indexed = Vec::with_capacity(modules.len());
    for module in modules {
        let mut fs = config.module_file_system(module, root);
        if let Some(work_dir) = fs.work_dir() {
            debug!(
                module = %module.key,
                work_dir = %work_dir.display(),
                "module working directory"
            );
        }
        let status = HashStatusDetection::from_snapshot(cache.by_module(&module.key));
        let filters = ExclusionFilters::new(config.exclusion_settings(module));

        let report = FileIndexer::new(filters, &languages, &status).index(&mut fs, &mut cache)?;
        indexed.push(IndexedModule {
            key: module.key.clone(),
            report,
            files: fs.input_files().cloned().collect(),
        });
    }

    if !no_cache {
        cache.save(&cache_path)?;
        info!(path = %cache_path.display(), entries = cache.len(), "cache saved");
    }
    Ok(indexed)
}

fn select_modules<'c>(
    loaded: &'c LoadedConfig,
    selected: &[String],
) -> Result<Vec<&'c ModuleConfig>> {
    if selected.is_empty() {
        return Ok(loaded.config.modules.iter().collect());
    }
    selected
        .iter()
        .map(|key| {
            loaded
                .config
                .module(key)
                .ok_or_else(|| IndexerError::Config(format!("Unknown module '{key}'")))
        })
        .collect()
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;

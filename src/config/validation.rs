//! Configuration semantic validation.
//!
//! Checks that a parsed configuration describes a consistent module tree.

use std::collections::HashSet;

use crate::error::{IndexerError, Result};
use crate::pattern::PathPattern;

use super::model::split_patterns;
use super::{Config, ModuleConfig};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a module key is empty or declared twice, a child key
/// does not name a declared module, a language has nothing to match on, or a
/// pattern does not compile.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_project(config)?;
    validate_languages(config)?;
    validate_module_keys(config)?;
    for module in &config.modules {
        validate_patterns(module)?;
    }
    Ok(())
}

fn validate_project(config: &Config) -> Result<()> {
    if config.project.encoding.trim().is_empty() {
        return Err(IndexerError::Config(
            "project.encoding must not be empty".to_string(),
        ));
    }
    PathPattern::compile_all(&split_patterns(&config.project.global_exclusions))?;
    PathPattern::compile_all(&split_patterns(&config.project.global_test_exclusions))?;
    Ok(())
}

fn validate_languages(config: &Config) -> Result<()> {
    for (i, language) in config.languages.iter().enumerate() {
        if language.name.trim().is_empty() {
            return Err(IndexerError::Config(format!(
                "languages[{i}].name must not be empty"
            )));
        }
        if language.extensions.is_empty() && language.patterns.is_empty() {
            return Err(IndexerError::Config(format!(
                "language '{}' needs at least one extension or pattern",
                language.name
            )));
        }
        PathPattern::compile_all(&language.patterns)?;
    }
    Ok(())
}

fn validate_module_keys(config: &Config) -> Result<()> {
    let mut keys = HashSet::new();
    for (i, module) in config.modules.iter().enumerate() {
        if module.key.trim().is_empty() {
            return Err(IndexerError::Config(format!(
                "module[{i}].key must not be empty"
            )));
        }
        if !keys.insert(module.key.as_str()) {
            return Err(IndexerError::Config(format!(
                "module '{}' is declared more than once",
                module.key
            )));
        }
    }

    for module in &config.modules {
        for child in &module.modules {
            if child == &module.key {
                return Err(IndexerError::Config(format!(
                    "module '{}' lists itself as a child",
                    module.key
                )));
            }
            if !keys.contains(child.as_str()) {
                return Err(IndexerError::Config(format!(
                    "module '{}' has unknown child module '{child}'",
                    module.key
                )));
            }
        }
    }
    Ok(())
}

fn validate_patterns(module: &ModuleConfig) -> Result<()> {
    for patterns in [
        &module.inclusions,
        &module.exclusions,
        &module.test_inclusions,
        &module.test_exclusions,
    ] {
        PathPattern::compile_all(&split_patterns(patterns))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;

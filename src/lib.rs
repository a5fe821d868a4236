pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod indexer;
pub mod input_file;
pub mod language;
pub mod logging;
pub mod output;
pub mod path_utils;
pub mod pattern;
pub mod scanner;
pub mod status;

pub use error::{IndexerError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

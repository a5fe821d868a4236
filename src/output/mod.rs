use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::indexer::IndexReport;
use crate::input_file::InputFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Records of one module, as printed by the commands.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleListing<'a> {
    pub module: &'a str,
    #[serde(flatten)]
    pub report: Option<IndexReport>,
    pub files: Vec<&'a InputFile>,
}

impl<'a> ModuleListing<'a> {
    #[must_use]
    pub fn new(module: &'a str, files: impl IntoIterator<Item = &'a InputFile>) -> Self {
        Self {
            module,
            report: None,
            files: files.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn with_report(mut self, report: IndexReport) -> Self {
        self.report = Some(report);
        self
    }
}

/// One line per record: `<module> <type> <status> <language|-> <path>`.
#[must_use]
pub fn record_line(module: &str, file: &InputFile) -> String {
    format!(
        "{module} {} {} {} {}",
        file.file_type(),
        file.status(),
        file.language().unwrap_or("-"),
        file.relative_path()
    )
}

/// Format listings in the requested format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_listings(listings: &[ModuleListing<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(listings)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(listings)?),
    }
}

fn format_text(listings: &[ModuleListing<'_>]) -> String {
    let mut output = String::new();
    for listing in listings {
        for file in &listing.files {
            let _ = writeln!(output, "{}", record_line(listing.module, file));
        }
    }
    output
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an mdparser.toml, and if present we load settings from there.
//! This provides the default output format and search context preferences; command line flags
//! still take precedence.

use crate::error::{Error, Result};
use crate::formats::OutputFormat;
use clap::ValueEnum;
use facet::Facet;
use std::path::Path;
use std::{fs, io};

/// File looked up in the working directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "mdparser.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from mdparser.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "markdown".to_string())]
    /// Output format used when `--format` is not given.
    pub format: String,
    #[facet(default = 0)]
    /// Context lines before each search match.
    pub lines_before: i64,
    #[facet(default = 0)]
    /// Context lines after each search match.
    pub lines_after: i64,
    #[facet(default = false)]
    /// Search case-sensitively by default.
    pub case_sensitive: bool,
}

impl Config {
    /// Load configuration from mdparser.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match fs::read_to_string(CONFIG_FILE_NAME) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::from_toml(""),
            Err(source) => Err(Error::Io {
                path: CONFIG_FILE_NAME.into(),
                source,
            }),
        }
    }

    /// Load configuration from an explicit path, which must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML for this structure.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// The configured output format.
    ///
    /// # Errors
    ///
    /// Returns `Config` if `format` names no known format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.format, true)
            .map_err(|e| Error::Config(format!("unknown format {:?}: {e}", self.format)))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;

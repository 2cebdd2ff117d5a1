use crate::ffmeta::WriterOptions;
use crate::metadata::{RecordWriter, DEFAULT_LIST_SEPARATOR};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from ~/.config/ffmetactl/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub writer: WriterConfig,
}

/// How ffmetadata output is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Formatting options read from the same table (`pretty_format`)
    #[serde(flatten)]
    pub options: WriterOptions,

    /// Joins list fields (authors, narrators, tags) into one value
    #[serde(default = "default_list_separator")]
    pub list_separator: String,
}

fn default_list_separator() -> String {
    DEFAULT_LIST_SEPARATOR.to_string()
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            options: WriterOptions::default(),
            list_separator: default_list_separator(),
        }
    }
}

impl Config {
    /// Load configuration from the default path (~/.config/ffmetactl/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("ffmetactl").join("config.toml"))
    }

    /// Writer options, with the CLI `--pretty` flag taking precedence
    pub fn writer_options(&self, pretty_override: bool) -> WriterOptions {
        WriterOptions {
            pretty_format: pretty_override || self.writer.options.pretty_format,
        }
    }

    /// Record writer built from this configuration
    pub fn record_writer(&self, pretty_override: bool) -> RecordWriter {
        RecordWriter::new(
            self.writer_options(pretty_override),
            self.writer.list_separator.clone(),
        )
    }
}

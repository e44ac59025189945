//! Settings for the `abnt` tools: output format and width, and the reading
//! rates behind document statistics.
//!
//! The commented `defaults/abnt.default.toml` is compiled in and always forms
//! the bottom layer. ABNT thresholds (abstract length, keyword and reference
//! minimums) are fixed by the standard and are not settings.

use abnt_parser::abnt::formats::text::TextOptions;
use abnt_parser::abnt::formats::OutputFormat;
use abnt_parser::abnt::stats::StatsSettings;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/abnt.default.toml");

/// Top-level configuration consumed by abnt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AbntConfig {
    pub output: OutputConfig,
    pub stats: StatsSettings,
}

/// How results are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub width: usize,
}

impl OutputConfig {
    pub fn text_options(&self) -> TextOptions {
        TextOptions { width: self.width }
    }
}

/// Builds an [`AbntConfig`] from the embedded defaults plus whatever the user
/// layers on top. Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file given with `--config`; building fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file that may not exist, such as a per-project `abnt.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key (`output.width`, `stats.words_per_page`) above every file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and read them into an [`AbntConfig`]. Unknown output
    /// formats and non-numeric widths surface here as `ConfigError`.
    pub fn build(self) -> Result<AbntConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<AbntConfig, ConfigError> {
    Loader::new().build()
}

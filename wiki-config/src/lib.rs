//! Shared configuration loader for the wiki tools.
//!
//! `defaults/wiki.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WikiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use wiki_babel::TranscodeOptions;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/wiki.default.toml");

/// Top-level configuration consumed by the wiki applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    pub transcode: TranscodeConfig,
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Mirrors the knobs exposed by the transcoder.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscodeConfig {
    pub max_depth: usize,
    pub balance_tags: bool,
}

impl From<&TranscodeConfig> for TranscodeOptions {
    fn from(config: &TranscodeConfig) -> Self {
        TranscodeOptions {
            max_depth: config.max_depth,
            balance_tags: config.balance_tags,
        }
    }
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Target format per source format, used when none is requested.
    pub targets: HashMap<String, String>,
}

impl ConvertConfig {
    pub fn target_for(&self, source_format: &str) -> Option<&str> {
        self.targets.get(source_format).map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub transform: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WikiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WikiConfig, ConfigError> {
    Loader::new().build()
}

//! Shared configuration loader for the workout toolchain.
//!
//! `defaults/workout.default.toml` is embedded into every binary so the documented defaults
//! and the runtime ones cannot drift apart. Applications layer a user file and individual
//! overrides on top via [`Loader`] before deserializing into [`WorkoutConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use workout_parser::{ParseOptions, Sport};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/workout.default.toml");

/// Top-level configuration consumed by workout applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutConfig {
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

/// Parser knobs. Converts into [`ParseOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub sport: Sport,
    pub max_lines: usize,
    pub max_bytes: usize,
}

impl From<&ParsingConfig> for ParseOptions {
    fn from(config: &ParsingConfig) -> Self {
        ParseOptions {
            sport: config.sport,
            max_lines: config.max_lines,
            max_bytes: config.max_bytes,
        }
    }
}

impl From<ParsingConfig> for ParseOptions {
    fn from(config: ParsingConfig) -> Self {
        ParseOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_warnings: bool,
}

/// How the CLI renders a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human readable outline with totals.
    Summary,
    Json,
    Yaml,
    /// Classified lines only, one per source line.
    Lines,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["summary", "json", "yaml", "lines"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Summary => "summary",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Lines => "lines",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
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

    /// Layer an optional configuration file, ignored if absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WorkoutConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WorkoutConfig, ConfigError> {
    Loader::new().build()
}

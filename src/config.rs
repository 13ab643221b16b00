//! Configuration loader for the linelex tool.
//!
//! The defaults live in `defaults/linelex.default.toml` and are compiled into the binary.
//! [`Loader`] stacks a project file, a user file, `LINELEX_*` environment variables and
//! command-line overrides on top of them, then deserializes into [`LinelexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/linelex.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LinelexConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// How tokenized lines are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_text: bool,
    pub show_state: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Flat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

/// Environment variables with this prefix override file settings,
/// e.g. `LINELEX_OUTPUT__FORMAT=json`.
pub const ENV_PREFIX: &str = "LINELEX";

/// Layers sources from lowest to highest precedence: embedded defaults, files in the order
/// they were added, environment, explicit overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
    environment: bool,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self {
            builder,
            environment: false,
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), false)
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Read `LINELEX_*` variables when building.
    pub fn with_environment(mut self) -> Self {
        self.environment = true;
        self
    }

    /// Force a single key, e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<LinelexConfig, ConfigError> {
        let mut builder = self.builder;
        if self.environment {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );
        }
        builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<LinelexConfig, ConfigError> {
    Loader::new().build()
}

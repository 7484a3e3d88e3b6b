//! Layered configuration for restyle.
//!
//! `defaults/restyle.default.toml` is embedded into the binary so the
//! documented defaults and runtime behavior stay in sync. Callers layer a
//! project file and command-line overrides on top via [`Loader`] before
//! deserializing into [`RestyleConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use restyle_css::{SectionSpec, default_sections};

const DEFAULT_TOML: &str = include_str!("../defaults/restyle.default.toml");

/// Name of the project file picked up from the working directory.
pub const PROJECT_FILE: &str = "restyle.toml";

/// Top-level configuration consumed by the `restyle` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct RestyleConfig {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Source of the trailing block.
    #[serde(default)]
    pub template: TemplateConfig,
    /// Sections to extract, in output order.
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionSpec>,
}

/// Input and output file locations.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Stylesheet to read.
    pub input: PathBuf,
    /// Stylesheet to write.
    pub output: PathBuf,
}

/// Where the trailing block comes from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateConfig {
    /// File whose contents replace the built-in component block.
    pub path: Option<PathBuf>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    #[must_use]
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error on build.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    #[must_use]
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command-line flags).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `key` is not a valid config path.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required file is missing, a file is
    /// not valid TOML, or the merged values do not match [`RestyleConfig`].
    pub fn build(self) -> Result<RestyleConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the embedded defaults fail to deserialize.
pub fn load_defaults() -> Result<RestyleConfig, ConfigError> {
    Loader::new().build()
}

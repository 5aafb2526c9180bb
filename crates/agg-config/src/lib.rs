//! # agg-config
//!
//! Layered configuration loading for the aggregator toolchain using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGGREGATOR_*` prefix, `__` as separator)
//! 2. Project-level `aggregator.toml`
//! 3. User-level `~/.config/aggregator/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AGGREGATOR_SOURCES__API_KEY` -> `sources.api_key`,
//! `AGGREGATOR_VALIDATION__MODE` -> `validation.mode`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use agg_config::AggConfig;
//!
//! let root = Path::new(".");
//! let config = AggConfig::load_with_dotenv(root).expect("config");
//! let paths = config.paths.resolve(root);
//! println!("logos live in {}", paths.logo_dir.display());
//! ```

mod build;
mod error;
mod logos;
mod paths;
mod site;
mod sources;

pub use build::{BuildConfig, ValidationConfig};
pub use error::ConfigError;
pub use logos::LogosConfig;
pub use paths::{PathsConfig, ResolvedPaths};
pub use site::SiteConfig;
pub use sources::SourcesConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the project-local configuration file.
pub const PROJECT_CONFIG_FILE: &str = "aggregator.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AggConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub logos: LogosConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

impl AggConfig {
    /// Load configuration for the project at `project_root`.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` support.
    ///
    /// Reads `<project_root>/.env` when present, otherwise falls back to the
    /// `.env` lookup from the current directory. Missing files are ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        } else {
            let _ = dotenvy::dotenv();
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("AGGREGATOR_").split("__"))
    }

    /// Reject values that would make a pipeline step meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(template) = self
            .logos
            .providers
            .iter()
            .find(|template| !template.contains("{domain}"))
        {
            return Err(ConfigError::InvalidValue {
                field: "logos.providers".to_string(),
                reason: format!("template '{template}' has no {{domain}} placeholder"),
            });
        }
        if self.logos.placeholder.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logos.placeholder".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.build.command.split_whitespace().next().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "build.command".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aggregator").join("config.toml"))
    }
}

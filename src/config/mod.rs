//! Configuration management for chainctl
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use handler_chain::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! for (name, chain) in &config.chains {
//!     println!("{name}: {:?}", chain.handlers);
//! }
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `CHAINCTL__<section>__<key>`
//!
//! Examples:
//! - `CHAINCTL__LOGGING__FILTER=debug`
//! - `CHAINCTL__LOGGING__ANSI=false`
//!
//! The `chains` table is taken as a whole from the highest source that sets
//! any part of it. A file with a `[chains.*]` section, or a single
//! `CHAINCTL__CHAINS__<name>__<key>` variable, replaces the built-in
//! `numbers` and `words` chains instead of merging into them.
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/chains.toml`.
//! This can be overridden using the `CHAINCTL_CONFIG` environment variable.
//!
//! ```toml
//! [logging]
//! filter = "info"
//!
//! [chains.numbers]
//! request = "integer"
//! handlers = ["even", "odd"]
//!
//! [chains.words]
//! request = "text"
//! handlers = ["upper", "lower"]
//! ```

mod models;
mod sources;
mod validation;

pub use models::{ChainConfig, Config, LoggingConfig, RequestKind};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Unknown chain: {0}")]
    UnknownChain(String),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`CHAINCTL__*`)
    /// 2. TOML file (default: `config/chains.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file is malformed
    /// - Validation fails (blank or duplicate handler names)
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Parse and validate an inline TOML document, ignoring the environment
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Look up a chain by name
    pub fn chain(&self, name: &str) -> Result<&ChainConfig, ConfigError> {
        self.chains
            .get(name)
            .ok_or_else(|| ConfigError::UnknownChain(name.to_string()))
    }
}

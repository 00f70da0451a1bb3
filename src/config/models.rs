use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "default_chains")]
    pub chains: BTreeMap<String, ChainConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            chains: default_chains(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            ansi: default_ansi(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_ansi() -> bool {
    true
}

/// Kind of request a chain routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Signed 64-bit integers
    Integer,
    /// UTF-8 strings
    Text,
}

/// A named chain: request kind plus handler names in priority order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainConfig {
    pub request: RequestKind,
    #[serde(default)]
    pub handlers: Vec<String>,
}

fn default_chains() -> BTreeMap<String, ChainConfig> {
    BTreeMap::from([
        (
            "numbers".to_string(),
            ChainConfig {
                request: RequestKind::Integer,
                handlers: vec!["even".to_string(), "odd".to_string()],
            },
        ),
        (
            "words".to_string(),
            ChainConfig {
                request: RequestKind::Text,
                handlers: vec!["upper".to_string(), "lower".to_string()],
            },
        ),
    ])
}

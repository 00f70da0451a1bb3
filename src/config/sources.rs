use super::models::Config;
use config::{ConfigError, Environment, File, Map};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "CHAINCTL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/chains.toml";
const ENV_PREFIX: &str = "CHAINCTL";
const ENV_SEPARATOR: &str = "__";

/// Load `.env`, then the file named by `CHAINCTL_CONFIG` (or `config/chains.toml`)
/// layered under `CHAINCTL__*` variables.
pub fn load() -> Result<Config, ConfigError> {
    let _ = dotenvy::dotenv();

    let config_path = env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    load_from_sources(config_path)
}

/// Layer `config_path` (optional) under the process environment
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    load_with_environment(config_path, None)
}

/// Same as [`load_from_sources`], reading `CHAINCTL__*` keys from `vars`
/// instead of the process environment when given.
///
/// Any `CHAINCTL__CHAINS__*` key makes `chains` present, which replaces the
/// built-in chain table rather than merging into it.
pub fn load_with_environment(
    config_path: PathBuf,
    vars: Option<Map<String, String>>,
) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!(path = %config_path.display(), "Loading chain configuration");
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            path = %config_path.display(),
            "Chain configuration file not found, using built-in chains"
        );
    }

    // CHAINCTL__LOGGING__FILTER -> logging.filter
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(vars),
    );

    builder.build()?.try_deserialize()
}

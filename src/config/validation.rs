use super::models::{ChainConfig, Config};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Chain '{chain}' contains a blank handler name")]
    BlankHandlerName { chain: String },

    #[error("Chain '{chain}' lists handler '{handler}' more than once")]
    DuplicateHandler { chain: String, handler: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    for (name, chain) in &config.chains {
        validate_chain(name, chain)?;
    }
    Ok(())
}

/// Handler names must be non-blank and unique within a chain
fn validate_chain(name: &str, chain: &ChainConfig) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();

    for handler in &chain.handlers {
        let handler = handler.trim();
        if handler.is_empty() {
            return Err(ValidationError::BlankHandlerName {
                chain: name.to_string(),
            });
        }
        if !seen.insert(handler) {
            return Err(ValidationError::DuplicateHandler {
                chain: name.to_string(),
                handler: handler.to_string(),
            });
        }
    }

    Ok(())
}

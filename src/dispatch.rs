//! Route raw requests through a configured chain

use serde::Serialize;
use std::num::ParseIntError;
use thiserror::Error;

use crate::chain::BoxedHandler;
use crate::config::{Config, ConfigError, RequestKind};
use crate::handlers::{HandlerRegistry, RegistryError};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid integer request '{value}': {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Result of offering one request to a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub request: String,
    pub handled: bool,
}

/// Offer each request to the chain named `chain_name`, in order.
///
/// Integer chains parse every request up front, so a malformed request fails
/// the whole call before anything is handled. An empty chain reports every
/// request as unhandled.
pub fn route<S>(
    config: &Config,
    chain_name: &str,
    requests: &[S],
) -> Result<Vec<Outcome>, DispatchError>
where
    S: AsRef<str>,
{
    let chain = config.chain(chain_name)?;
    tracing::debug!(
        chain = chain_name,
        kind = ?chain.request,
        handlers = ?chain.handlers,
        "Assembling chain"
    );

    let outcomes: Vec<Outcome> = match chain.request {
        RequestKind::Integer => {
            let numbers = requests
                .iter()
                .map(|raw| parse_integer(raw.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            let head = HandlerRegistry::<i64>::with_defaults().assemble(&chain.handlers)?;

            requests
                .iter()
                .zip(&numbers)
                .map(|(raw, n)| outcome(raw.as_ref(), offer(head.as_ref(), n)))
                .collect()
        }
        RequestKind::Text => {
            let head = HandlerRegistry::<str>::with_defaults().assemble(&chain.handlers)?;

            requests
                .iter()
                .map(|raw| outcome(raw.as_ref(), offer(head.as_ref(), raw.as_ref())))
                .collect()
        }
    };

    Ok(outcomes)
}

fn parse_integer(raw: &str) -> Result<i64, DispatchError> {
    raw.trim()
        .parse()
        .map_err(|source| DispatchError::InvalidInteger {
            value: raw.to_string(),
            source,
        })
}

fn offer<T: ?Sized>(head: Option<&BoxedHandler<T>>, request: &T) -> bool {
    head.is_some_and(|handler| handler.handle(request))
}

fn outcome(request: &str, handled: bool) -> Outcome {
    if !handled {
        tracing::info!(request, "Request not handled by any handler");
    }
    Outcome {
        request: request.to_string(),
        handled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handled(outcomes: &[Outcome]) -> Vec<bool> {
        outcomes.iter().map(|o| o.handled).collect()
    }

    #[test]
    fn test_route_numbers() {
        let config = Config::default();
        let outcomes = route(&config, "numbers", &["1", "2", "-3", " 4 "]).unwrap();

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[3].request, " 4 ");
        assert_eq!(handled(&outcomes), vec![true; 4]);
    }

    #[test]
    fn test_route_words() {
        let config = Config::default();
        let outcomes =
            route(&config, "words", &["HELLO", "world", "MixedCase", "golang", "TEST", ""]).unwrap();

        assert_eq!(handled(&outcomes), vec![true, true, false, true, true, false]);
    }

    #[test]
    fn test_route_partial_chain() {
        let config = Config::from_toml_str(
            r#"
[chains.evens]
request = "integer"
handlers = ["even"]
            "#,
        )
        .unwrap();

        let outcomes = route(&config, "evens", &["2", "3"]).unwrap();
        assert_eq!(handled(&outcomes), vec![true, false]);
    }

    #[test]
    fn test_route_empty_chain() {
        let config = Config::from_toml_str(
            r#"
[chains.nothing]
request = "text"
handlers = []
            "#,
        )
        .unwrap();

        let outcomes = route(&config, "nothing", &["ABC", "abc"]).unwrap();
        assert_eq!(handled(&outcomes), vec![false, false]);
    }

    #[test]
    fn test_route_invalid_integer() {
        let config = Config::default();
        let result = route(&config, "numbers", &["1", "two"]);
        assert!(matches!(
            result,
            Err(DispatchError::InvalidInteger { value, .. }) if value == "two"
        ));
    }

    #[test]
    fn test_route_unknown_chain() {
        let config = Config::default();
        let result = route(&config, "letters", &["a"]);
        assert!(matches!(
            result,
            Err(DispatchError::Config(ConfigError::UnknownChain(_)))
        ));
    }

    #[test]
    fn test_route_unknown_handler() {
        let config = Config::from_toml_str(
            r#"
[chains.mixed]
request = "integer"
handlers = ["even", "upper"]
            "#,
        )
        .unwrap();

        let result = route(&config, "mixed", &["1"]);
        assert!(matches!(
            result,
            Err(DispatchError::Registry(RegistryError::NotFound(name))) if name == "upper"
        ));
    }

    #[test]
    fn test_outcome_serializes_to_json() {
        let outcome = Outcome {
            request: "7".to_string(),
            handled: true,
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"request":"7","handled":true}"#
        );
    }
}

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use super::numbers::{EvenHandler, OddHandler};
use super::text::{LowerCaseHandler, UpperCaseHandler};
use crate::chain::{BoxedHandler, ChainBuilder};

/// Produces a fresh, unlinked handler each time it is called
pub type HandlerFactory<T> = Arc<dyn Fn() -> BoxedHandler<T> + Send + Sync>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("handler not found: {0}")]
    NotFound(String),
}

/// Registry mapping handler names to factories
///
/// Chains are assembled from names (e.g. from configuration), so every
/// assembled chain owns its own handler instances.
pub struct HandlerRegistry<T: ?Sized> {
    factories: BTreeMap<String, HandlerFactory<T>>,
}

impl<T: ?Sized> HandlerRegistry<T> {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> BoxedHandler<T> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn create(&self, name: &str) -> Result<BoxedHandler<T>, RegistryError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Build a chain from handler names in priority order.
    ///
    /// Returns `Ok(None)` for an empty list. Fails on the first unknown name.
    pub fn assemble<S>(&self, names: &[S]) -> Result<Option<BoxedHandler<T>>, RegistryError>
    where
        S: AsRef<str>,
    {
        let mut builder = ChainBuilder::new();
        for name in names {
            builder = builder.add_boxed(self.create(name.as_ref())?);
        }

        Ok(builder.build())
    }
}

impl HandlerRegistry<i64> {
    /// Registry with the built-in integer handlers: `even`, `odd`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("even", || Box::new(EvenHandler::new()));
        registry.register("odd", || Box::new(OddHandler::new()));
        registry
    }
}

impl HandlerRegistry<str> {
    /// Registry with the built-in string handlers: `upper`, `lower`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("upper", || Box::new(UpperCaseHandler::new()));
        registry.register("lower", || Box::new(LowerCaseHandler::new()));
        registry
    }
}

impl<T: ?Sized> Default for HandlerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for HandlerRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            factories: self.factories.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for HandlerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

use std::fmt;

use super::handler::{BoxedHandler, ChainHandler};

/// Assembles handlers into a linear chain
///
/// Insertion order is priority order: the first handler added sees every
/// request first. Appending is O(1); links are wired when [`build`](Self::build)
/// hands ownership of each handler to its predecessor.
pub struct ChainBuilder<T: ?Sized> {
    links: Vec<BoxedHandler<T>>,
}

impl<T: ?Sized> ChainBuilder<T> {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Append a handler to the end of the chain
    pub fn add<H>(self, handler: H) -> Self
    where
        H: ChainHandler<T> + 'static,
    {
        self.add_boxed(Box::new(handler))
    }

    /// Append an already boxed handler (e.g. one produced by a registry)
    pub fn add_boxed(mut self, handler: BoxedHandler<T>) -> Self {
        tracing::debug!(
            handler = handler.name(),
            position = self.links.len(),
            "Adding handler to chain"
        );
        self.links.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Link the handlers and return the head, or `None` if nothing was added.
    ///
    /// Every handler except the last has its successor replaced by the
    /// handler added after it. The last handler keeps whatever successor it
    /// already had.
    pub fn build(self) -> Option<BoxedHandler<T>> {
        let len = self.links.len();
        let mut head: Option<BoxedHandler<T>> = None;

        for mut link in self.links.into_iter().rev() {
            if let Some(next) = head.take() {
                link.set_successor(next);
            }
            head = Some(link);
        }

        match &head {
            Some(first) => tracing::debug!(head = first.name(), len, "Chain built"),
            None => tracing::debug!("Chain built with no handlers"),
        }

        head
    }
}

impl<T: ?Sized> Default for ChainBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ChainBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.links.iter().map(|h| h.name()))
            .finish()
    }
}

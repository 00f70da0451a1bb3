use std::fmt;

/// Name reported by handlers that do not override [`ChainHandler::name`]
pub const BASE_HANDLER_NAME: &str = "BaseChainHandler";

/// Owned, type-erased chain link
pub type BoxedHandler<T> = Box<dyn ChainHandler<T>>;

/// A link in a chain of responsibility over requests of type `T`
///
/// Implementors decide whether they accept a request. Requests they do not
/// accept go to the successor via [`forward`] (or [`Successor::forward`]),
/// so the "call next or report unhandled" step lives in one place.
///
/// Handlers are `Send + Sync` so a built chain can be shared across threads
/// for read-only traversal.
pub trait ChainHandler<T: ?Sized>: Send + Sync {
    /// Handle the request, or pass it on. Returns whether some handler accepted it.
    fn handle(&self, request: &T) -> bool;

    /// Replace the next link and return it, so links can be chained by hand
    fn set_successor(&mut self, next: BoxedHandler<T>) -> &mut dyn ChainHandler<T>;

    /// The next link, if any
    fn successor(&self) -> Option<&dyn ChainHandler<T>>;

    /// Identifier used in logs
    fn name(&self) -> &str {
        BASE_HANDLER_NAME
    }
}

/// Offer `request` to `next`, or report it unhandled when there is no next link.
///
/// `next` is the full trait object, so its own predicate runs.
pub fn forward<T: ?Sized>(next: Option<&dyn ChainHandler<T>>, request: &T) -> bool {
    match next {
        Some(handler) => {
            tracing::trace!(to = handler.name(), "Forwarding request");
            handler.handle(request)
        }
        None => {
            tracing::trace!("Request reached end of chain unhandled");
            false
        }
    }
}

/// Successor slot embedded by concrete handlers
pub struct Successor<T: ?Sized> {
    next: Option<BoxedHandler<T>>,
}

impl<T: ?Sized> Successor<T> {
    pub fn new() -> Self {
        Self { next: None }
    }

    pub fn set(&mut self, next: BoxedHandler<T>) -> &mut dyn ChainHandler<T> {
        &mut **self.next.insert(next)
    }

    pub fn get(&self) -> Option<&dyn ChainHandler<T>> {
        self.next.as_deref()
    }

    pub fn take(&mut self) -> Option<BoxedHandler<T>> {
        self.next.take()
    }

    pub fn is_set(&self) -> bool {
        self.next.is_some()
    }

    pub fn forward(&self, request: &T) -> bool {
        forward(self.get(), request)
    }
}

impl<T: ?Sized> Default for Successor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Successor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Successor")
            .field("next", &self.get().map(|h| h.name()))
            .finish()
    }
}

/// Handler with no predicate of its own; every request goes to the successor
pub struct PassThrough<T: ?Sized> {
    next: Successor<T>,
}

impl<T: ?Sized> PassThrough<T> {
    pub fn new() -> Self {
        Self {
            next: Successor::new(),
        }
    }
}

impl<T: ?Sized> Default for PassThrough<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for PassThrough<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassThrough").field("next", &self.next).finish()
    }
}

impl<T: ?Sized> ChainHandler<T> for PassThrough<T> {
    fn handle(&self, request: &T) -> bool {
        self.next.forward(request)
    }

    fn set_successor(&mut self, next: BoxedHandler<T>) -> &mut dyn ChainHandler<T> {
        self.next.set(next)
    }

    fn successor(&self) -> Option<&dyn ChainHandler<T>> {
        self.next.get()
    }
}

/// Named handler whose predicate is a closure
///
/// The closure does whatever processing it needs and returns `true` when it
/// accepted the request. Rejected requests are forwarded.
pub struct FnHandler<T: ?Sized, F> {
    name: String,
    accept: F,
    next: Successor<T>,
}

impl<T, F> FnHandler<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, accept: F) -> Self {
        Self {
            name: name.into(),
            accept,
            next: Successor::new(),
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for FnHandler<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler")
            .field("name", &self.name)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

impl<T, F> ChainHandler<T> for FnHandler<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    fn handle(&self, request: &T) -> bool {
        if (self.accept)(request) {
            return true;
        }
        self.next.forward(request)
    }

    fn set_successor(&mut self, next: BoxedHandler<T>) -> &mut dyn ChainHandler<T> {
        self.next.set(next)
    }

    fn successor(&self) -> Option<&dyn ChainHandler<T>> {
        self.next.get()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Iterator over a chain, head first
pub struct Links<'a, T: ?Sized> {
    current: Option<&'a dyn ChainHandler<T>>,
}

impl<'a, T: ?Sized> Iterator for Links<'a, T> {
    type Item = &'a dyn ChainHandler<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let handler = self.current?;
        self.current = handler.successor();
        Some(handler)
    }
}

/// Walk the chain starting at `head`, following successor links
pub fn links<T: ?Sized>(head: &dyn ChainHandler<T>) -> Links<'_, T> {
    Links {
        current: Some(head),
    }
}

use crate::chain::{BoxedHandler, ChainHandler, Successor};

/// Accepts non-empty strings that have no lower-case letters
#[derive(Debug, Default)]
pub struct UpperCaseHandler {
    next: Successor<str>,
}

impl UpperCaseHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainHandler<str> for UpperCaseHandler {
    fn handle(&self, request: &str) -> bool {
        if !request.is_empty() && request.to_uppercase() == request {
            tracing::info!(handler = self.name(), request, "Handled upper-case string");
            return true;
        }
        self.next.forward(request)
    }

    fn set_successor(&mut self, next: BoxedHandler<str>) -> &mut dyn ChainHandler<str> {
        self.next.set(next)
    }

    fn successor(&self) -> Option<&dyn ChainHandler<str>> {
        self.next.get()
    }

    fn name(&self) -> &str {
        "UpperCaseHandler"
    }
}

/// Accepts non-empty strings that have no upper-case letters
#[derive(Debug, Default)]
pub struct LowerCaseHandler {
    next: Successor<str>,
}

impl LowerCaseHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainHandler<str> for LowerCaseHandler {
    fn handle(&self, request: &str) -> bool {
        if !request.is_empty() && request.to_lowercase() == request {
            tracing::info!(handler = self.name(), request, "Handled lower-case string");
            return true;
        }
        self.next.forward(request)
    }

    fn set_successor(&mut self, next: BoxedHandler<str>) -> &mut dyn ChainHandler<str> {
        self.next.set(next)
    }

    fn successor(&self) -> Option<&dyn ChainHandler<str>> {
        self.next.get()
    }

    fn name(&self) -> &str {
        "LowerCaseHandler"
    }
}

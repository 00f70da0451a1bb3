use crate::chain::{BoxedHandler, ChainHandler, Successor};

/// Accepts even integers
#[derive(Debug, Default)]
pub struct EvenHandler {
    next: Successor<i64>,
}

impl EvenHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainHandler<i64> for EvenHandler {
    fn handle(&self, request: &i64) -> bool {
        if request % 2 == 0 {
            tracing::info!(handler = self.name(), request, "Handled even number");
            return true;
        }
        self.next.forward(request)
    }

    fn set_successor(&mut self, next: BoxedHandler<i64>) -> &mut dyn ChainHandler<i64> {
        self.next.set(next)
    }

    fn successor(&self) -> Option<&dyn ChainHandler<i64>> {
        self.next.get()
    }

    fn name(&self) -> &str {
        "EvenHandler"
    }
}

/// Accepts odd integers (negative ones included)
#[derive(Debug, Default)]
pub struct OddHandler {
    next: Successor<i64>,
}

impl OddHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainHandler<i64> for OddHandler {
    fn handle(&self, request: &i64) -> bool {
        if request % 2 != 0 {
            tracing::info!(handler = self.name(), request, "Handled odd number");
            return true;
        }
        self.next.forward(request)
    }

    fn set_successor(&mut self, next: BoxedHandler<i64>) -> &mut dyn ChainHandler<i64> {
        self.next.set(next)
    }

    fn successor(&self) -> Option<&dyn ChainHandler<i64>> {
        self.next.get()
    }

    fn name(&self) -> &str {
        "OddHandler"
    }
}

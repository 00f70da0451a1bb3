//! Chain of responsibility core
//!
//! A request is offered to the head of a chain and passed along successor
//! links until one handler accepts it or the chain runs out.
//!
//! ## Key Components
//!
//! - [`ChainHandler`] - Capability set every chain link implements
//! - [`Successor`] - Link slot a handler embeds to own its next handler
//! - [`forward`] - Shared delegation used for the non-matching case
//! - [`ChainBuilder`] - Assembles handlers in priority order
//! - [`links`] - Walks a built chain from its head
//!
//! ## Example
//!
//! ```rust
//! use handler_chain::chain::{ChainBuilder, FnHandler};
//!
//! let chain = ChainBuilder::<i64>::new()
//!     .add(FnHandler::new("negative", |n: &i64| *n < 0))
//!     .add(FnHandler::new("small", |n: &i64| *n < 100))
//!     .build()
//!     .expect("two handlers were added");
//!
//! assert!(chain.handle(&-3));
//! assert!(chain.handle(&42));
//! assert!(!chain.handle(&1000));
//! ```

mod builder;
mod handler;

pub use builder::ChainBuilder;
pub use handler::{
    BASE_HANDLER_NAME, BoxedHandler, ChainHandler, FnHandler, Links, PassThrough, Successor,
    forward, links,
};

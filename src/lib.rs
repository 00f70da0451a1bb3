//! # handler-chain
//!
//! Chain of responsibility over any request type, with a fluent builder,
//! built-in example handlers, a name-based handler registry, undoable
//! commands, and configuration for the `chainctl` binary.
//!
//! ## Example
//!
//! ```rust
//! use handler_chain::chain::ChainBuilder;
//! use handler_chain::handlers::{EvenHandler, OddHandler};
//!
//! let chain = ChainBuilder::new()
//!     .add(EvenHandler::new())
//!     .add(OddHandler::new())
//!     .build()
//!     .expect("chain has two handlers");
//!
//! for n in [1, 2, 3, 4] {
//!     assert!(chain.handle(&n));
//! }
//! ```

pub mod chain;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod observability;

pub use chain::{BoxedHandler, ChainBuilder, ChainHandler};
pub use command::{Command, CommandError, CommandHistory};
pub use dispatch::{DispatchError, Outcome};

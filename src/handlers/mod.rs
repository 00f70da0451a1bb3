//! Built-in handlers and the handler registry
//!
//! ## Key Components
//!
//! - [`EvenHandler`] / [`OddHandler`] - Route integers by parity
//! - [`UpperCaseHandler`] / [`LowerCaseHandler`] - Route strings by case
//! - [`HandlerRegistry`] - Maps handler names to factories and assembles chains
//!
//! ## Example
//!
//! ```rust
//! use handler_chain::handlers::HandlerRegistry;
//!
//! let registry = HandlerRegistry::<str>::with_defaults();
//! let chain = registry.assemble(&["upper", "lower"]).unwrap().unwrap();
//!
//! assert!(chain.handle("HELLO"));
//! assert!(chain.handle("world"));
//! assert!(!chain.handle("MixedCase"));
//! ```

mod numbers;
mod registry;
mod text;

pub use numbers::{EvenHandler, OddHandler};
pub use registry::{HandlerFactory, HandlerRegistry, RegistryError};
pub use text::{LowerCaseHandler, UpperCaseHandler};

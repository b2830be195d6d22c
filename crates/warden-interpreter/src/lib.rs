//! Warden Interpreter
//!
//! Turns one chat line into at most one response line.
//!
//! Each message is matched against a fixed priority order of intents
//! (`list-available`, `query-one`, `claim`, `unclaim`, `no-command`). The POI
//! phrase of a query, claim or unclaim is resolved to a canonical id before
//! the registry is consulted; an unknown phrase never touches the registry.
//! The interpreter holds no per-message state of its own.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use warden_domain::{Catalog, ChatEvent, Poi, SystemClock};
//! use warden_interpreter::CommandInterpreter;
//! use warden_registry::ClaimRegistry;
//! use warden_resolver::{NameResolver, ResolverConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let catalog = Arc::new(Catalog::new(vec![
//!     Poi::new("tisy-t4", &["Tisy Power Plant T4", "Tisy"]),
//! ]).unwrap());
//! let resolver = Arc::new(NameResolver::new(&catalog, ResolverConfig::default()).unwrap());
//! let interpreter = CommandInterpreter::new(
//!     catalog,
//!     resolver,
//!     Arc::new(ClaimRegistry::new()),
//!     Arc::new(SystemClock),
//! );
//!
//! let reply = interpreter.handle(&ChatEvent::new("Alice", "claim tisy")).await;
//! assert_eq!(reply.as_deref(), Some("Alice claimed Tisy Power Plant T4."));
//! # }
//! ```

#![warn(missing_docs)]

pub mod command;
pub mod interpreter;
pub mod responses;

pub use command::Command;
pub use interpreter::CommandInterpreter;

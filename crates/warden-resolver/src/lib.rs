//! Warden Resolver
//!
//! Maps free-text POI references typed in chat to canonical POI ids.
//!
//! Resolution runs in order, first success wins:
//! - **Normalize**: trim, lower-case, collapse whitespace runs
//! - **Exact**: match against every canonical id and alias
//! - **Approximate**: score every candidate with a string-similarity metric
//!   in `[0, 1]` and accept the best one at or above the threshold
//!
//! The resolver is built once from the catalog and is read-only afterwards,
//! so it can be shared across request handlers without locking.
//!
//! # Examples
//!
//! ```
//! use warden_domain::{Catalog, Poi, PoiId};
//! use warden_resolver::{NameResolver, ResolverConfig};
//!
//! let catalog = Catalog::new(vec![
//!     Poi::new("tisy-t4", &["Tisy Power Plant T4", "Tisy"]),
//! ]).unwrap();
//! let resolver = NameResolver::new(&catalog, ResolverConfig::default()).unwrap();
//!
//! assert_eq!(resolver.resolve("  TISY "), Some(PoiId::new("tisy-t4")));
//! assert_eq!(resolver.resolve("tisi"), Some(PoiId::new("tisy-t4")));
//! assert_eq!(resolver.resolve("berezino"), None);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod resolver;

pub use config::{ResolverConfig, SimilarityMetric};
pub use error::ResolverError;
pub use resolver::{normalize, NameResolver};

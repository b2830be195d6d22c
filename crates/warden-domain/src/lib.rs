//! Warden Domain Layer
//!
//! Core vocabulary shared by every Warden crate: the static POI catalog,
//! the claim value object, the inbound chat event, and the trait seams for
//! the collaborators that live outside the core (clock, outbound message
//! channel, proximity oracle).
//!
//! ## Key Concepts
//!
//! - **POI**: a named location that can be exclusively claimed
//! - **Catalog**: the immutable, ordered set of POIs loaded at startup
//! - **Claim**: an (owner, acquisition time) pair; created once, never mutated
//! - **Clock**: injected time source so expiry can be tested deterministically
//!
//! ## Architecture
//!
//! This crate holds no mutable shared state. The claim registry, resolver,
//! sweeper and interpreter all build on these types and traits.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod claim;
pub mod clock;
pub mod event;
pub mod poi;
pub mod traits;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError};
pub use claim::Claim;
pub use clock::{Clock, ManualClock, SystemClock};
pub use event::ChatEvent;
pub use poi::{Poi, PoiId};
pub use traits::{
    DeliveryError, LogSink, MessageSink, ProximityError, ProximityOracle, RecordingSink,
};

//! Warden Registry
//!
//! The claim registry: the only shared mutable state in Warden.
//!
//! Holds at most one [`Claim`](warden_domain::Claim) per POI id and exposes
//! atomic claim, release, status, availability and expiry operations. A
//! single process-wide mutex guards the map; every operation is an O(1)
//! lookup or a single pass over a small map with no I/O, so the lock is
//! never held across an await point or an outbound delivery.

#![warn(missing_docs)]

pub mod registry;

pub use registry::{ClaimOutcome, ClaimRegistry, ReleaseOutcome};

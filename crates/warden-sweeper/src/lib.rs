//! Warden Sweeper
//!
//! Background task that evicts stale claims from the registry.
//!
//! # Overview
//!
//! The Sweeper is responsible for:
//! - **Expiry**: removing every claim whose age has reached the configured TTL
//! - **Notification**: announcing each freed POI on the outbound channel
//! - **Metrics**: counting sweeps, evictions and delivery outcomes
//!
//! Eviction always happens before notification. The registry lock is released
//! before any message is sent, and a failed delivery is logged and dropped:
//! it never restores the evicted claim and is never retried.
//!
//! The sweep period is independent of the TTL, so a claim may outlive its
//! TTL by up to one interval.
//!
//! # Usage
//!
//! ## One-time Sweep
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use warden_domain::{Catalog, Clock, ManualClock, Poi, PoiId, RecordingSink};
//! use warden_registry::ClaimRegistry;
//! use warden_sweeper::{Sweeper, SweeperConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let catalog = Arc::new(Catalog::new(vec![Poi::new("tisy", &["Tisy"])]).unwrap());
//! let registry = Arc::new(ClaimRegistry::new());
//! let clock = Arc::new(ManualClock::new());
//! let sink = Arc::new(RecordingSink::new());
//!
//! registry.try_claim(&PoiId::new("tisy"), "Alice", clock.now());
//! clock.advance(Duration::from_secs(60 * 60));
//!
//! let mut sweeper = Sweeper::new(
//!     SweeperConfig::default(),
//!     registry.clone(),
//!     catalog,
//!     sink.clone(),
//!     clock,
//! );
//! let report = sweeper.sweep().await;
//! assert_eq!(report.evicted.len(), 1);
//! assert_eq!(sink.messages().len(), 1);
//! # }
//! ```
//!
//! ## Background Worker
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use warden_domain::{Catalog, LogSink, Poi, SystemClock};
//! # use warden_registry::ClaimRegistry;
//! use warden_sweeper::{Sweeper, SweeperConfig, SweeperWorker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #   let catalog = Arc::new(Catalog::new(vec![Poi::new("tisy", &["Tisy"])])?);
//! #   let registry = Arc::new(ClaimRegistry::new());
//!     let config = SweeperConfig::default();
//!     let sweeper = Sweeper::new(config, registry, catalog, Arc::new(LogSink), Arc::new(SystemClock));
//!     let mut worker = SweeperWorker::new(sweeper)?;
//!
//!     // Run indefinitely (until Ctrl+C)
//!     worker.run().await;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [sweeper]
//! sweep_interval_secs = 60
//! claim_ttl_minutes = 60
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod sweeper;
mod worker;

pub use config::SweeperConfig;
pub use error::SweeperError;
pub use metrics::SweeperMetrics;
pub use sweeper::{expiry_notice, SweepReport, Sweeper};
pub use worker::SweeperWorker;

//! Core Sweeper implementation

use crate::{SweeperConfig, SweeperMetrics};
use std::sync::Arc;
use warden_domain::{Catalog, Claim, Clock, MessageSink, PoiId};
use warden_registry::ClaimRegistry;

/// Message announcing that an expired claim freed a POI
///
/// ```
/// assert_eq!(
///     warden_sweeper::expiry_notice("Tisy Power Plant T4", "Alice"),
///     "Claim on Tisy Power Plant T4 by Alice expired. Tisy Power Plant T4 is available again."
/// );
/// ```
pub fn expiry_notice(display_name: &str, owner: &str) -> String {
    format!(
        "Claim on {} by {} expired. {} is available again.",
        display_name, owner, display_name
    )
}

/// Outcome of a single sweep
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Claims removed in this sweep, ordered by POI id
    pub evicted: Vec<(PoiId, Claim)>,

    /// Notices that could not be delivered
    pub failed_notifications: usize,
}

/// Evicts expired claims and announces freed POIs
pub struct Sweeper {
    config: SweeperConfig,
    metrics: SweeperMetrics,
    registry: Arc<ClaimRegistry>,
    catalog: Arc<Catalog>,
    sink: Arc<dyn MessageSink>,
    clock: Arc<dyn Clock>,
}

impl Sweeper {
    /// Create a new Sweeper over a shared registry
    pub fn new(
        config: SweeperConfig,
        registry: Arc<ClaimRegistry>,
        catalog: Arc<Catalog>,
        sink: Arc<dyn MessageSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            metrics: SweeperMetrics::new(),
            registry,
            catalog,
            sink,
            clock,
        }
    }

    /// Sweeper configuration
    pub fn config(&self) -> &SweeperConfig {
        &self.config
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &SweeperMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Perform one sweep cycle
    ///
    /// Evicts every expired claim in one atomic registry call, then sends one
    /// notice per evicted claim. Delivery failures are logged and counted;
    /// they do not undo the eviction.
    pub async fn sweep(&mut self) -> SweepReport {
        let now = self.clock.now();
        let evicted = self.registry.sweep_expired(now, self.config.claim_ttl());

        let mut failed_notifications = 0;
        for (poi, claim) in &evicted {
            self.metrics.record_eviction(poi);
            let display = self.catalog.display_name(poi);
            tracing::info!(
                poi = %poi,
                owner = %claim.owner(),
                age_secs = claim.age(now).as_secs(),
                "claim expired"
            );

            let notice = expiry_notice(display, claim.owner());
            match self.sink.send(&notice).await {
                Ok(()) => self.metrics.record_notification(true),
                Err(e) => {
                    tracing::warn!(poi = %poi, "Failed to deliver expiry notice: {}", e);
                    self.metrics.record_notification(false);
                    failed_notifications += 1;
                }
            }
        }

        self.metrics.record_sweep();
        SweepReport {
            evicted,
            failed_notifications,
        }
    }
}

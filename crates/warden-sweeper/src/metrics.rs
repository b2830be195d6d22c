//! Metrics collection for Sweeper operations

use std::collections::BTreeMap;
use warden_domain::PoiId;

/// Metrics collected across sweep cycles
#[derive(Debug, Clone, Default)]
pub struct SweeperMetrics {
    /// Claims evicted per POI
    pub evicted: BTreeMap<PoiId, usize>,

    /// Expiry notices delivered
    pub notifications_sent: usize,

    /// Expiry notices that failed to deliver
    pub notifications_failed: usize,

    /// Total sweep iterations completed
    pub sweep_count: usize,
}

impl SweeperMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evicted claim
    pub fn record_eviction(&mut self, poi: &PoiId) {
        *self.evicted.entry(poi.clone()).or_insert(0) += 1;
    }

    /// Record the outcome of one expiry notice
    pub fn record_notification(&mut self, delivered: bool) {
        if delivered {
            self.notifications_sent += 1;
        } else {
            self.notifications_failed += 1;
        }
    }

    /// Record a sweep cycle completion
    pub fn record_sweep(&mut self) {
        self.sweep_count += 1;
    }

    /// Total claims evicted across all POIs
    pub fn total_evicted(&self) -> usize {
        self.evicted.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Sweeper Metrics Summary".to_string(),
            "=======================".to_string(),
            format!("Sweep cycles: {}", self.sweep_count),
            format!(
                "Notifications: {} sent, {} failed",
                self.notifications_sent, self.notifications_failed
            ),
        ];

        if !self.evicted.is_empty() {
            lines.push(String::new());
            lines.push("Evictions by POI:".to_string());
            for (poi, count) in &self.evicted {
                lines.push(format!("  {}: {}", poi, count));
            }
            lines.push(format!("  Total: {}", self.total_evicted()));
        }

        lines.join("\n")
    }
}

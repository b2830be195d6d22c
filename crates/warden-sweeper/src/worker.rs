//! Background worker for continuous Sweeper operation

use crate::{Sweeper, SweeperError, SweeperMetrics};
use std::future::Future;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Background worker that runs the Sweeper on a fixed interval
///
/// Runs independently of request traffic; it shares nothing with request
/// handlers except the registry's atomic operations.
pub struct SweeperWorker {
    sweeper: Sweeper,
    interval: Duration,
}

impl SweeperWorker {
    /// Create a new background worker, validating the sweeper's configuration
    pub fn new(sweeper: Sweeper) -> Result<Self, SweeperError> {
        sweeper.config().validate()?;
        let interval = sweeper.config().sweep_interval();
        Ok(Self { sweeper, interval })
    }

    /// Run the worker until a shutdown signal (Ctrl+C) is received
    pub async fn run(&mut self) {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;
    }

    /// Run the worker until `shutdown` completes
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        tracing::info!(
            "Sweeper worker started (interval: {:?}, ttl: {:?})",
            self.interval,
            self.sweeper.config().claim_ttl()
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::debug!("Starting sweep cycle");
                    let report = self.sweeper.sweep().await;
                    if !report.evicted.is_empty() {
                        tracing::info!(
                            "Sweep completed: {} evicted, {} notices failed",
                            report.evicted.len(),
                            report.failed_notifications
                        );
                    }
                }
                _ = &mut shutdown => {
                    tracing::info!("Shutdown signal received, stopping sweeper");
                    break;
                }
            }
        }

        tracing::info!("Sweeper stopped. Final metrics:\n{}", self.metrics().summary());
    }

    /// Run for a specific number of cycles (useful for testing)
    pub async fn run_cycles(&mut self, cycles: usize) {
        let mut ticker = interval(self.interval);

        for cycle in 0..cycles {
            ticker.tick().await;
            let report = self.sweeper.sweep().await;
            tracing::debug!(
                "Sweep {}/{} completed: {} evicted",
                cycle + 1,
                cycles,
                report.evicted.len()
            );
        }
    }

    /// Get a reference to the sweeper's current metrics
    pub fn metrics(&self) -> &SweeperMetrics {
        self.sweeper.metrics()
    }

    /// Reset the sweeper's metrics counters
    pub fn reset_metrics(&mut self) {
        self.sweeper.reset_metrics();
    }
}

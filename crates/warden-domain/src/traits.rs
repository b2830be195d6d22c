//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the claim core and the
//! collaborators it does not own: the outbound chat channel and the
//! optional proximity oracle.

use crate::poi::PoiId;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Outbound delivery failure
///
/// Always logged and swallowed by the core; never retried synchronously.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote end answered but refused the message
    #[error("Rejected by remote: {0}")]
    Rejected(String),
}

/// Proximity lookup failure
#[derive(Debug, Error)]
pub enum ProximityError {
    /// Player is not currently known to the telemetry source
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    /// Telemetry source unavailable
    #[error("Telemetry unavailable: {0}")]
    Unavailable(String),
}

/// Trait for delivering a message to the game server
///
/// Fire-and-forget from the core's perspective: the result is only logged.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver a single message
    async fn send(&self, message: &str) -> Result<(), DeliveryError>;
}

/// Trait for checking whether a player is close enough to claim a POI
#[async_trait]
pub trait ProximityOracle: Send + Sync {
    /// Returns `true` if `player` is currently near `poi`
    async fn is_near(&self, player: &str, poi: &PoiId) -> Result<bool, ProximityError>;
}

/// Sink that only writes messages to the log
///
/// Used when no outbound endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl MessageSink for LogSink {
    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        tracing::info!(target: "warden::outbound", "{}", message);
        Ok(())
    }
}

/// Sink that keeps every message in memory
///
/// # Examples
///
/// ```
/// use warden_domain::{MessageSink, RecordingSink};
///
/// # let rt = tokio::runtime::Runtime::new().unwrap();
/// let sink = RecordingSink::new();
/// rt.block_on(sink.send("Tisy is available again.")).unwrap();
/// assert_eq!(sink.drain(), vec!["Tisy is available again.".to_string()]);
/// assert!(sink.messages().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Take all recorded messages, leaving the sink empty
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        Ok(())
    }
}

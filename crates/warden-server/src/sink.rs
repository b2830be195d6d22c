//! Outbound chat delivery to the game server.
//!
//! Messages are POSTed as JSON to the configured endpoint. There is no
//! retry: the core treats delivery as fire-and-forget and only logs failures.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use warden_domain::{DeliveryError, MessageSink};

/// Request body for the outbound chat endpoint
#[derive(Serialize)]
struct OutboundMessage<'a> {
    message: &'a str,
}

/// Message sink that POSTs each line to an HTTP endpoint
pub struct HttpSink {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSink {
    /// Create a sink for `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl MessageSink for HttpSink {
    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&OutboundMessage { message })
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected(format!("HTTP {}", status)));
        }

        tracing::debug!(endpoint = %self.endpoint, "outbound message delivered");
        Ok(())
    }
}

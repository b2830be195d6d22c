//! Inbound chat event

use serde::{Deserialize, Serialize};

/// One chat line delivered by the upstream event source
///
/// Arrives already signature-verified and filtered to chat events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEvent {
    /// Player name as supplied upstream
    pub player_name: String,

    /// Raw chat message
    pub message: String,
}

impl ChatEvent {
    /// Create a new chat event
    pub fn new(player_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            message: message.into(),
        }
    }
}

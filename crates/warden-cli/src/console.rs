//! Offline arbiter session driven by typed input.
//!
//! A [`Console`] wires the same components as the server but replaces the
//! outbound channel with an in-memory sink and the wall clock with a manual
//! one, so expiry can be exercised by advancing time instead of waiting.

use crate::error::{CliError, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use warden_domain::{Catalog, ChatEvent, Clock, ManualClock, RecordingSink};
use warden_interpreter::responses::format_ago;
use warden_server::config::ServerConfig;
use warden_server::handlers::AppState;
use warden_sweeper::Sweeper;

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    /// `player: message`
    Chat(ChatEvent),
    /// Run the expiry sweep now
    Sweep,
    /// Move the clock forward, then sweep
    Advance(Duration),
    /// Show active claims
    Claims,
    /// Show the POI catalog
    Catalog,
    /// Show sweeper counters
    Stats,
    /// Show help
    Help,
    /// Leave the console
    Exit,
}

impl ConsoleInput {
    /// Parse a console line.
    ///
    /// Anything containing a `:` is treated as chat, so keywords never
    /// shadow a player's message.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();

        if let Some((player, message)) = line.split_once(':') {
            let player = player.trim();
            if player.is_empty() {
                return Err(CliError::InvalidInput(
                    "Chat lines look like 'player: message'".to_string(),
                ));
            }
            return Ok(ConsoleInput::Chat(ChatEvent::new(player, message.trim())));
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(keyword) = parts.first() else {
            return Err(CliError::InvalidInput("Empty command".to_string()));
        };

        match keyword.to_lowercase().as_str() {
            "exit" | "quit" | "q" => Ok(ConsoleInput::Exit),
            "help" | "?" => Ok(ConsoleInput::Help),
            "sweep" => Ok(ConsoleInput::Sweep),
            "claims" => Ok(ConsoleInput::Claims),
            "catalog" => Ok(ConsoleInput::Catalog),
            "stats" => Ok(ConsoleInput::Stats),
            "advance" => parse_advance(&parts[1..]),
            other => Err(CliError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            ))),
        }
    }
}

fn parse_advance(args: &[&str]) -> Result<ConsoleInput> {
    let minutes = args
        .first()
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| CliError::InvalidInput("Usage: advance <minutes>".to_string()))?;
    Ok(ConsoleInput::Advance(Duration::from_secs(minutes.saturating_mul(60))))
}

/// One active claim, as shown by the `claims` command.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimRow {
    /// Canonical POI id
    pub poi: String,
    /// Human-readable POI name
    pub display_name: String,
    /// Claim holder
    pub owner: String,
    /// Age, e.g. "5 minutes ago"
    pub claimed: String,
}

/// Offline arbiter session.
pub struct Console {
    state: AppState,
    sweeper: Sweeper,
    sink: Arc<RecordingSink>,
    clock: Arc<ManualClock>,
}

impl Console {
    /// Build a session from server configuration.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let sink = Arc::new(RecordingSink::new());
        let clock = Arc::new(ManualClock::new());
        let (state, sweeper) = warden_server::build_app(config, sink.clone(), clock.clone())?;

        Ok(Self {
            state,
            sweeper,
            sink,
            clock,
        })
    }

    /// Feed one chat line to the interpreter.
    pub async fn chat(&self, event: &ChatEvent) -> Option<String> {
        self.state.interpreter.handle(event).await
    }

    /// Run one sweep and return the notices it produced.
    pub async fn sweep(&mut self) -> Vec<String> {
        self.sweeper.sweep().await;
        self.sink.drain()
    }

    /// Advance the clock, then sweep as the background worker would.
    pub async fn advance(&mut self, by: Duration) -> Vec<String> {
        self.clock.advance(by);
        self.sweep().await
    }

    /// Active claims ordered by POI id.
    pub fn claims(&self) -> Vec<ClaimRow> {
        let now = self.clock.now();
        self.state
            .registry
            .snapshot()
            .into_iter()
            .map(|(id, claim)| ClaimRow {
                display_name: self.state.catalog.display_name(&id).to_string(),
                poi: id.to_string(),
                owner: claim.owner().to_string(),
                claimed: format_ago(claim.age(now)),
            })
            .collect()
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }

    /// Sweeper counters since start.
    pub fn stats(&self) -> String {
        self.sweeper.metrics().summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console {
        Console::new(&ServerConfig::default_test_config()).unwrap()
    }

    #[test]
    fn test_parse_chat_line() {
        let input = ConsoleInput::parse("  Alice :  claim tisy ").unwrap();
        assert_eq!(input, ConsoleInput::Chat(ChatEvent::new("Alice", "claim tisy")));
    }

    #[test]
    fn test_parse_chat_keeps_later_colons() {
        let input = ConsoleInput::parse("Bob: note: claim nwaf").unwrap();
        assert_eq!(input, ConsoleInput::Chat(ChatEvent::new("Bob", "note: claim nwaf")));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(ConsoleInput::parse("sweep").unwrap(), ConsoleInput::Sweep);
        assert_eq!(ConsoleInput::parse("QUIT").unwrap(), ConsoleInput::Exit);
        assert_eq!(ConsoleInput::parse("?").unwrap(), ConsoleInput::Help);
        assert_eq!(ConsoleInput::parse("claims").unwrap(), ConsoleInput::Claims);
        assert_eq!(
            ConsoleInput::parse("advance 61").unwrap(),
            ConsoleInput::Advance(Duration::from_secs(61 * 60))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(ConsoleInput::parse(": hello").is_err());
        assert!(ConsoleInput::parse("").is_err());
        assert!(ConsoleInput::parse("advance").is_err());
        assert!(ConsoleInput::parse("advance soon").is_err());
        assert!(ConsoleInput::parse("dance").is_err());
    }

    #[tokio::test]
    async fn test_claim_then_expire() {
        let mut console = console();

        let reply = console.chat(&ChatEvent::new("Alice", "claim tisy")).await;
        assert_eq!(reply.as_deref(), Some("Alice claimed Tisy Power Plant T4."));
        assert_eq!(console.claims().len(), 1);

        assert!(console.advance(Duration::from_secs(30 * 60)).await.is_empty());
        assert_eq!(console.claims()[0].claimed, "30 minutes ago");

        let notices = console.advance(Duration::from_secs(30 * 60)).await;
        assert_eq!(
            notices,
            vec!["Claim on Tisy Power Plant T4 by Alice expired. Tisy Power Plant T4 is available again."]
        );
        assert!(console.claims().is_empty());
    }

    #[tokio::test]
    async fn test_sweep_without_claims_is_quiet() {
        let mut console = console();
        assert!(console.sweep().await.is_empty());
        assert!(console.stats().contains("Sweep cycles: 1"));
    }

    #[tokio::test]
    async fn test_plain_chat_has_no_reply() {
        let console = console();
        assert!(console.chat(&ChatEvent::new("Alice", "hello there")).await.is_none());
        assert_eq!(console.catalog().len(), 3);
    }
}

//! Command dispatch: resolve, consult the registry, answer.

use crate::command::Command;
use crate::responses;
use std::sync::Arc;
use std::time::Duration;
use warden_domain::{Catalog, ChatEvent, Clock, PoiId, ProximityOracle};
use warden_registry::{ClaimOutcome, ClaimRegistry, ReleaseOutcome};
use warden_resolver::NameResolver;

/// Default claim time-to-live reported in status replies
const DEFAULT_CLAIM_TTL: Duration = Duration::from_secs(60 * 60);

/// Interprets chat lines against the shared claim registry
///
/// Cheap to share: every field is an `Arc` or plain data, and no method
/// holds the registry lock across an await point.
#[derive(Clone)]
pub struct CommandInterpreter {
    catalog: Arc<Catalog>,
    resolver: Arc<NameResolver>,
    registry: Arc<ClaimRegistry>,
    clock: Arc<dyn Clock>,
    proximity: Option<Arc<dyn ProximityOracle>>,
    claim_ttl: Duration,
}

impl CommandInterpreter {
    /// Create an interpreter without a proximity check
    pub fn new(
        catalog: Arc<Catalog>,
        resolver: Arc<NameResolver>,
        registry: Arc<ClaimRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            resolver,
            registry,
            clock,
            proximity: None,
            claim_ttl: DEFAULT_CLAIM_TTL,
        }
    }

    /// Require a successful proximity check before every claim
    pub fn with_proximity(mut self, oracle: Arc<dyn ProximityOracle>) -> Self {
        self.proximity = Some(oracle);
        self
    }

    /// TTL used to report remaining claim time (should match the sweeper's)
    pub fn with_claim_ttl(mut self, ttl: Duration) -> Self {
        self.claim_ttl = ttl;
        self
    }

    /// Handle one chat line; `None` means the line was not a command
    pub async fn handle(&self, event: &ChatEvent) -> Option<String> {
        let command = Command::parse(&event.message);
        tracing::debug!(player = %event.player_name, ?command, "parsed chat line");
        self.execute(&event.player_name, command).await
    }

    /// Execute an already parsed command for `player`
    pub async fn execute(&self, player: &str, command: Command) -> Option<String> {
        let response = match command {
            Command::NoCommand => return None,
            Command::ListAvailable => self.list_available(),
            Command::Query(phrase) => match self.resolve_phrase(&phrase) {
                Some(id) => self.query(&id),
                None => self.unknown(&phrase),
            },
            Command::Claim(phrase) => match self.resolve_phrase(&phrase) {
                Some(id) => self.claim(player, &id).await,
                None => self.unknown(&phrase),
            },
            Command::Unclaim(phrase) => match self.resolve_phrase(&phrase) {
                Some(id) => self.unclaim(player, &id),
                None => self.unknown(&phrase),
            },
        };
        Some(response)
    }

    /// Resolve `phrase`, dropping trailing words until a POI matches
    ///
    /// "tisy now" and "nwaf please" resolve through their leading words.
    fn resolve_phrase(&self, phrase: &str) -> Option<PoiId> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        (1..=words.len())
            .rev()
            .find_map(|len| self.resolver.resolve(&words[..len].join(" ")))
    }

    fn unknown(&self, phrase: &str) -> String {
        tracing::debug!(phrase = %phrase, "unresolved POI phrase");
        responses::unknown_poi(phrase)
    }

    fn list_available(&self) -> String {
        let ids = self
            .registry
            .list_available(&self.catalog.ids(), &self.catalog.excluded_ids());
        let names: Vec<&str> = ids.iter().map(|id| self.catalog.display_name(id)).collect();
        responses::available(&names)
    }

    fn query(&self, id: &PoiId) -> String {
        let name = self.catalog.display_name(id);
        match self.registry.status(id) {
            Some(claim) => {
                let age = claim.age(self.clock.now());
                responses::status_claimed(
                    name,
                    claim.owner(),
                    age,
                    self.claim_ttl.saturating_sub(age),
                )
            }
            None => responses::status_available(name),
        }
    }

    async fn claim(&self, player: &str, id: &PoiId) -> String {
        let name = self.catalog.display_name(id);

        if let Some(oracle) = &self.proximity {
            match oracle.is_near(player, id).await {
                Ok(true) => {}
                Ok(false) => return responses::too_far(player, name),
                Err(e) => {
                    tracing::warn!(player = %player, poi = %id, "Proximity check failed: {}", e);
                    return responses::position_unknown(player);
                }
            }
        }

        match self.registry.try_claim(id, player, self.clock.now()) {
            ClaimOutcome::Accepted => responses::claimed(player, name),
            ClaimOutcome::AlreadyClaimed { owner, age } => {
                responses::already_claimed(name, &owner, age)
            }
        }
    }

    fn unclaim(&self, player: &str, id: &PoiId) -> String {
        let name = self.catalog.display_name(id);
        match self.registry.try_release(id, player) {
            ReleaseOutcome::Released => responses::unclaimed(player, name),
            ReleaseOutcome::NotClaimed => responses::not_claimed(name),
            ReleaseOutcome::NotOwner { owner } => responses::not_owner(name, &owner),
        }
    }
}

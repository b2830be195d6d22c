//! Claim registry enforcing at-most-one-owner-per-POI.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use warden_domain::{Claim, PoiId};

/// Result of [`ClaimRegistry::try_claim`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// A new claim was created for the requester
    Accepted,
    /// Someone already holds the POI; nothing changed
    AlreadyClaimed {
        /// Current owner, case preserved
        owner: String,
        /// Time since the current claim was acquired
        age: Duration,
    },
}

/// Result of [`ClaimRegistry::try_release`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The requester's claim was destroyed
    Released,
    /// No claim exists for the POI
    NotClaimed,
    /// The claim belongs to someone else; nothing changed
    NotOwner {
        /// Current owner, case preserved
        owner: String,
    },
}

/// Registry of active claims keyed by canonical POI id
///
/// Constructed once per process and shared by handle (`Arc`). Each method
/// takes the lock exactly once, so check-and-mutate is atomic with respect
/// to every other caller, including the expiry sweeper.
#[derive(Debug, Default)]
pub struct ClaimRegistry {
    claims: Mutex<BTreeMap<PoiId, Claim>>,
}

impl ClaimRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves partial state behind, so a poisoned lock still
    // guards a consistent map.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<PoiId, Claim>> {
        self.claims.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claim `id` for `owner` if nobody holds it
    pub fn try_claim(&self, id: &PoiId, owner: &str, now: Instant) -> ClaimOutcome {
        let mut claims = self.lock();
        if let Some(existing) = claims.get(id) {
            return ClaimOutcome::AlreadyClaimed {
                owner: existing.owner().to_string(),
                age: existing.age(now),
            };
        }

        claims.insert(id.clone(), Claim::new(owner, now));
        tracing::info!(poi = %id, owner = %owner, "claim accepted");
        ClaimOutcome::Accepted
    }

    /// Release `id` if `requester` owns it (case-insensitive)
    pub fn try_release(&self, id: &PoiId, requester: &str) -> ReleaseOutcome {
        let mut claims = self.lock();
        match claims.get(id) {
            None => ReleaseOutcome::NotClaimed,
            Some(existing) if !existing.is_owned_by(requester) => ReleaseOutcome::NotOwner {
                owner: existing.owner().to_string(),
            },
            Some(_) => {
                claims.remove(id);
                tracing::info!(poi = %id, owner = %requester, "claim released");
                ReleaseOutcome::Released
            }
        }
    }

    /// Current claim on `id`, if any
    pub fn status(&self, id: &PoiId) -> Option<Claim> {
        self.lock().get(id).cloned()
    }

    /// Ids from `all_ids` that are neither excluded nor claimed, in the order given
    pub fn list_available(&self, all_ids: &[PoiId], excluded_ids: &[PoiId]) -> Vec<PoiId> {
        let excluded: HashSet<&PoiId> = excluded_ids.iter().collect();
        let claims = self.lock();
        all_ids
            .iter()
            .filter(|id| !excluded.contains(id) && !claims.contains_key(*id))
            .cloned()
            .collect()
    }

    /// Remove and return every claim whose age has reached `ttl`
    ///
    /// Results are ordered by POI id.
    pub fn sweep_expired(&self, now: Instant, ttl: Duration) -> Vec<(PoiId, Claim)> {
        let mut claims = self.lock();
        let expired: Vec<PoiId> = claims
            .iter()
            .filter(|(_, claim)| claim.is_expired(now, ttl))
            .map(|(id, _)| id.clone())
            .collect();

        expired
            .into_iter()
            .filter_map(|id| claims.remove(&id).map(|claim| (id, claim)))
            .collect()
    }

    /// Snapshot of all active claims, ordered by POI id
    pub fn snapshot(&self) -> Vec<(PoiId, Claim)> {
        self.lock()
            .iter()
            .map(|(id, claim)| (id.clone(), claim.clone()))
            .collect()
    }

    /// Number of active claims
    pub fn active_count(&self) -> usize {
        self.lock().len()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    enum Op {
        Claim(usize, usize),
        Release(usize, usize),
        Advance(u64),
        Sweep,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..4usize, 0..3usize).prop_map(|(p, o)| Op::Claim(p, o)),
            (0..4usize, 0..3usize).prop_map(|(p, o)| Op::Release(p, o)),
            (0..120u64).prop_map(Op::Advance),
            Just(Op::Sweep),
        ]
    }

    proptest! {
        /// Property: the registry agrees with a single-owner model after every step
        #[test]
        fn test_matches_single_owner_model(ops in proptest::collection::vec(op(), 1..60)) {
            let pois = ["a", "b", "c", "d"];
            let owners = ["Alice", "Bob", "Carol"];
            let ttl = Duration::from_secs(100);

            let registry = ClaimRegistry::new();
            let mut model: HashMap<usize, (usize, Instant)> = HashMap::new();
            let mut now = Instant::now();

            for op in ops {
                match op {
                    Op::Claim(p, o) => {
                        let outcome = registry.try_claim(&PoiId::new(pois[p]), owners[o], now);
                        match model.get(&p).copied() {
                            Some((holder, at)) => prop_assert_eq!(
                                outcome,
                                ClaimOutcome::AlreadyClaimed {
                                    owner: owners[holder].to_string(),
                                    age: now - at,
                                }
                            ),
                            None => {
                                prop_assert_eq!(outcome, ClaimOutcome::Accepted);
                                model.insert(p, (o, now));
                            }
                        }
                    }
                    Op::Release(p, o) => {
                        let outcome = registry.try_release(&PoiId::new(pois[p]), owners[o]);
                        match model.get(&p).copied() {
                            None => prop_assert_eq!(outcome, ReleaseOutcome::NotClaimed),
                            Some((holder, _)) if holder == o => {
                                prop_assert_eq!(outcome, ReleaseOutcome::Released);
                                model.remove(&p);
                            }
                            Some((holder, _)) => prop_assert_eq!(
                                outcome,
                                ReleaseOutcome::NotOwner { owner: owners[holder].to_string() }
                            ),
                        }
                    }
                    Op::Advance(secs) => now += Duration::from_secs(secs),
                    Op::Sweep => {
                        let evicted = registry.sweep_expired(now, ttl);
                        let mut expected: Vec<&str> = model
                            .iter()
                            .filter(|(_, (_, at))| now - *at >= ttl)
                            .map(|(p, _)| pois[*p])
                            .collect();
                        expected.sort();
                        let actual: Vec<&str> = evicted.iter().map(|(id, _)| id.as_str()).collect();
                        prop_assert_eq!(actual, expected);
                        model.retain(|_, (_, at)| now - *at < ttl);
                    }
                }

                prop_assert_eq!(registry.active_count(), model.len());
            }
        }
    }
}

//! Claim module - exclusive, time-bounded ownership of a POI

use std::time::{Duration, Instant};

/// Current ownership of a POI
///
/// Claims are immutable once created: the owner is set exactly once and a
/// release always destroys the claim. A later claim by anyone creates a new
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    owner: String,
    acquired_at: Instant,
}

impl Claim {
    /// Create a new claim
    pub fn new(owner: impl Into<String>, acquired_at: Instant) -> Self {
        Self {
            owner: owner.into(),
            acquired_at,
        }
    }

    /// Owner name, case preserved for display
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// When the claim was acquired
    pub fn acquired_at(&self) -> Instant {
        self.acquired_at
    }

    /// Time elapsed since acquisition (zero if `now` precedes it)
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.acquired_at)
    }

    /// Whether the claim has reached its time-to-live
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) >= ttl
    }

    /// Case-insensitive ownership check
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Instant;
    /// use warden_domain::Claim;
    ///
    /// let claim = Claim::new("Survivor42", Instant::now());
    /// assert!(claim.is_owned_by("survivor42"));
    /// assert!(!claim.is_owned_by("Bandit"));
    /// ```
    pub fn is_owned_by(&self, requester: &str) -> bool {
        normalize_owner(&self.owner) == normalize_owner(requester)
    }
}

fn normalize_owner(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_and_expiry() {
        let start = Instant::now();
        let claim = Claim::new("Alice", start);

        let later = start + Duration::from_secs(90);
        assert_eq!(claim.age(later), Duration::from_secs(90));
        assert!(!claim.is_expired(later, Duration::from_secs(91)));
        assert!(claim.is_expired(later, Duration::from_secs(90)));
    }

    #[test]
    fn test_age_saturates_for_earlier_instant() {
        let start = Instant::now() + Duration::from_secs(10);
        let claim = Claim::new("Alice", start);
        assert_eq!(claim.age(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_ownership_is_case_insensitive_and_display_preserving() {
        let claim = Claim::new("ÉLodie", Instant::now());
        assert!(claim.is_owned_by("élodie"));
        assert!(claim.is_owned_by(" ÉLODIE "));
        assert_eq!(claim.owner(), "ÉLodie");
    }
}

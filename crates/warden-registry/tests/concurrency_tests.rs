//! Concurrent access tests for the claim registry

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};
use warden_domain::PoiId;
use warden_registry::{ClaimOutcome, ClaimRegistry, ReleaseOutcome};

#[test]
fn test_concurrent_claims_have_single_winner() {
    let registry = Arc::new(ClaimRegistry::new());
    let barrier = Arc::new(Barrier::new(16));
    let poi = PoiId::new("tisy");

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            let poi = poi.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.try_claim(&poi, &format!("player{}", i), Instant::now())
            })
        })
        .collect();

    let outcomes: Vec<ClaimOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = outcomes
        .iter()
        .filter(|o| matches!(o, ClaimOutcome::Accepted))
        .count();
    assert_eq!(winners, 1);

    let owner = registry.status(&poi).unwrap().owner().to_string();
    for outcome in outcomes {
        if let ClaimOutcome::AlreadyClaimed { owner: reported, .. } = outcome {
            assert_eq!(reported, owner);
        }
    }
}

#[test]
fn test_sweep_races_with_release() {
    let registry = Arc::new(ClaimRegistry::new());
    let start = Instant::now();
    let ttl = Duration::from_secs(60);

    for round in 0..200 {
        let poi = PoiId::new(format!("poi-{}", round));
        registry.try_claim(&poi, "Alice", start);

        let sweeper = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.sweep_expired(start + ttl, ttl).len())
        };
        let releaser = {
            let registry = Arc::clone(&registry);
            let poi = poi.clone();
            thread::spawn(move || registry.try_release(&poi, "Alice"))
        };

        let evicted = sweeper.join().unwrap();
        let released = releaser.join().unwrap();

        // Exactly one of the two removed the claim
        match released {
            ReleaseOutcome::Released => assert_eq!(evicted, 0),
            ReleaseOutcome::NotClaimed => assert_eq!(evicted, 1),
            other => panic!("Unexpected release outcome: {:?}", other),
        }
        assert_eq!(registry.active_count(), 0);
    }
}

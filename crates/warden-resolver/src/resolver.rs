//! Name resolution logic

use crate::{ResolverConfig, ResolverError};
use std::collections::HashMap;
use warden_domain::{Catalog, PoiId};

/// Normalize user text for matching
///
/// Trims, folds to lower case and collapses internal whitespace runs to a
/// single space.
///
/// ```
/// assert_eq!(warden_resolver::normalize("  Tisy   POWER\tplant "), "tisy power plant");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One matchable form of a POI (its id or one of its aliases)
#[derive(Debug, Clone)]
struct Candidate {
    key: String,
    poi: PoiId,
}

impl Candidate {
    fn first_token(&self) -> &str {
        first_token(&self.key)
    }
}

fn first_token(s: &str) -> &str {
    s.split(' ').next().unwrap_or("")
}

/// Best approximate candidate found so far
#[derive(Debug, Clone, Copy)]
struct Scored {
    index: usize,
    score: f64,
    affinity: bool,
}

/// Resolves raw user text to canonical POI ids
///
/// Candidates are kept in catalog order (id first, then aliases) so that
/// approximate matching is deterministic for identical input.
#[derive(Debug, Clone)]
pub struct NameResolver {
    config: ResolverConfig,
    candidates: Vec<Candidate>,
    exact: HashMap<String, PoiId>,
}

impl NameResolver {
    /// Build a resolver over a catalog
    ///
    /// When two POIs share a normalized alias, the one declared first wins
    /// exact lookups.
    pub fn new(catalog: &Catalog, config: ResolverConfig) -> Result<Self, ResolverError> {
        config.validate()?;

        let mut candidates = Vec::new();
        let mut exact = HashMap::new();
        for poi in catalog.pois() {
            let forms = std::iter::once(poi.id.as_str()).chain(poi.aliases.iter().map(String::as_str));
            for form in forms {
                let key = normalize(form);
                if key.is_empty() {
                    continue;
                }
                exact.entry(key.clone()).or_insert_with(|| poi.id.clone());
                candidates.push(Candidate {
                    key,
                    poi: poi.id.clone(),
                });
            }
        }

        Ok(Self {
            config,
            candidates,
            exact,
        })
    }

    /// Resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve raw text to a POI id, or `None` if nothing matches well enough
    pub fn resolve(&self, raw: &str) -> Option<PoiId> {
        let input = normalize(raw);
        if input.is_empty() {
            return None;
        }

        if let Some(id) = self.exact.get(&input) {
            tracing::debug!(input = %input, poi = %id, "exact match");
            return Some(id.clone());
        }

        let best = self.best_candidate(&input)?;
        let candidate = &self.candidates[best.index];
        if best.score >= self.config.threshold {
            tracing::debug!(
                input = %input,
                candidate = %candidate.key,
                poi = %candidate.poi,
                score = best.score,
                "approximate match accepted"
            );
            Some(candidate.poi.clone())
        } else {
            tracing::debug!(
                input = %input,
                candidate = %candidate.key,
                score = best.score,
                threshold = self.config.threshold,
                "no match above threshold"
            );
            None
        }
    }

    /// Highest-scoring candidate, ties broken by prefix/first-token affinity
    /// and then by catalog order
    fn best_candidate(&self, input: &str) -> Option<Scored> {
        let input_first = first_token(input);
        let mut best: Option<Scored> = None;

        for (index, candidate) in self.candidates.iter().enumerate() {
            let scored = Scored {
                index,
                score: self.config.metric.score(input, &candidate.key),
                affinity: candidate.key.starts_with(input)
                    || input.starts_with(candidate.key.as_str())
                    || candidate.first_token() == input_first,
            };

            best = match best {
                None => Some(scored),
                Some(current) if scored.score > current.score => Some(scored),
                Some(current)
                    if scored.score == current.score && scored.affinity && !current.affinity =>
                {
                    Some(scored)
                }
                keep => keep,
            };
        }

        best
    }
}

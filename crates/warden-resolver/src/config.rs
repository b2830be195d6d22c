//! Resolver configuration

use crate::ResolverError;
use serde::{Deserialize, Serialize};

/// String-similarity metric used for approximate matching
///
/// All metrics score in `[0.0, 1.0]` with `1.0` meaning identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// `1 - levenshtein / max_len`
    #[default]
    NormalizedLevenshtein,

    /// Jaro-Winkler, favours shared prefixes
    JaroWinkler,

    /// Sørensen-Dice coefficient over character bigrams
    SorensenDice,
}

impl SimilarityMetric {
    /// Score two already-normalized strings
    pub fn score(&self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityMetric::NormalizedLevenshtein => strsim::normalized_levenshtein(a, b),
            SimilarityMetric::JaroWinkler => strsim::jaro_winkler(a, b),
            SimilarityMetric::SorensenDice => strsim::sorensen_dice(a, b),
        }
    }
}

/// Configuration for name resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum similarity for an approximate match to be accepted
    /// Default: 0.6
    pub threshold: f64,

    /// Similarity metric for approximate matching
    /// Default: normalized Levenshtein
    pub metric: SimilarityMetric,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            metric: SimilarityMetric::default(),
        }
    }
}

impl ResolverConfig {
    /// Check that the threshold is a usable score
    pub fn validate(&self) -> Result<(), ResolverError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ResolverError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

//! Resolver error types

use thiserror::Error;

/// Errors raised while building a resolver
#[derive(Error, Debug, PartialEq)]
pub enum ResolverError {
    /// Acceptance threshold outside `[0.0, 1.0]`
    #[error("Invalid threshold {0}: must be within [0.0, 1.0]")]
    InvalidThreshold(f64),
}

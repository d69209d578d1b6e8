//! Error types for pool construction and sampling.

use crate::builder::Directive;

/// Error type for pool operations.
///
/// Every variant is a synchronous validation failure. Nothing is retried
/// internally; callers decide whether to try again with corrected input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PoolError {
    /// More than one mutually exclusive builder directive was populated
    #[error("Cannot specify '{first}' together with '{second}'")]
    ConflictingSpecification { first: Directive, second: Directive },

    /// Range pool bounds are out of order (or not comparable)
    #[error("Invalid range: start ({lower}) must be less than or equal to end ({upper})")]
    InvalidRange { lower: String, upper: String },

    /// Set-membership pool built from zero values
    #[error("Pool must contain at least one value")]
    EmptyDomain,

    /// No range conversion is registered for the bound type
    #[error("Unsupported range type: {type_name}")]
    UnsupportedDomain { type_name: &'static str },

    /// Boolean probability outside `[0, 1]`
    #[error("Probability must be between 0.0 and 1.0, got {0}")]
    InvalidProbability(f64),
}

impl PoolError {
    pub(crate) fn invalid_range<T: std::fmt::Debug>(lower: &T, upper: &T) -> Self {
        Self::InvalidRange {
            lower: format!("{lower:?}"),
            upper: format!("{upper:?}"),
        }
    }
}

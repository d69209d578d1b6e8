//! Error type for generator operations.

use fixture_core::PoolError;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A randomizer option describes an unusable range
    #[error("Invalid randomizer option '{option}': {source}")]
    InvalidConfig {
        option: &'static str,
        source: PoolError,
    },

    /// Pool error
    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),
}

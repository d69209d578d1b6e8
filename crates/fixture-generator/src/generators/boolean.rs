//! Boolean value generators.

use fixture_core::PoolError;
use rand::Rng;

/// Generate `true` with the given probability.
///
/// Fails with [`PoolError::InvalidProbability`] unless `probability` lies in
/// `[0, 1]`.
pub fn weighted_bool<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> Result<bool, PoolError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(PoolError::InvalidProbability(probability));
    }
    Ok(rng.random_bool(probability))
}

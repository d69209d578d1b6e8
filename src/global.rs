//! Process-wide default instance.

use crate::random::FixtureRandom;
use std::sync::OnceLock;

static DEFAULT: OnceLock<FixtureRandom> = OnceLock::new();

/// Shared [`FixtureRandom`] with the platform defaults, created on first use.
///
/// Callers on any thread may use it concurrently; each draws from its own
/// thread's generator. Build a dedicated instance with
/// [`FixtureRandom::configure`] when different defaults are needed.
pub fn default_random() -> &'static FixtureRandom {
    DEFAULT.get_or_init(FixtureRandom::new)
}

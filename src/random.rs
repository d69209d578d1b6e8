//! Per-domain value generation.
//!
//! [`FixtureRandom`] samples one value per call. Every domain method has a
//! `*_with` variant taking an inline [`PoolBuilder`] block; when the block
//! specifies a directive its pool is used, otherwise the configured default
//! pool for that domain is.
//!
//! ```rust
//! use fixturegen::FixtureRandom;
//!
//! let random = FixtureRandom::new();
//! let age = random
//!     .integer_with(|b| {
//!         b.between(18..=65);
//!     })
//!     .unwrap();
//! assert!((18..=65).contains(&age));
//!
//! let word = random.string();
//! assert!((1..=10).contains(&word.chars().count()));
//! ```

use crate::config::{ConfigError, RandomConfig, RandomConfigBuilder};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use fixture_core::{Pool, PoolBuilder, PoolError, PoolValue};
use fixture_generator::generators::{
    collect_list, collect_map, collect_set, generate_string, generate_string_between,
    generate_uuid_v4, pick, string, weighted_bool,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

enum RngSource {
    Thread,
    Seeded { seed: u64, rng: Mutex<StdRng> },
}

/// Generates values from a [`RandomConfig`].
///
/// Safe to share between threads. Unseeded instances draw from each calling
/// thread's own generator; seeded instances serialize access to one shared
/// generator, so a single-threaded caller sees a reproducible sequence.
pub struct FixtureRandom {
    config: RandomConfig,
    rng: RngSource,
}

impl Default for FixtureRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FixtureRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureRandom")
            .field("config", &self.config)
            .field("seed", &self.seed())
            .finish()
    }
}

impl FixtureRandom {
    /// Instance with the platform defaults.
    pub fn new() -> Self {
        Self::with_config(RandomConfig::default())
    }

    pub fn with_config(config: RandomConfig) -> Self {
        Self {
            config,
            rng: RngSource::Thread,
        }
    }

    /// Instance whose defaults are customized by `block`.
    pub fn configure(block: impl FnOnce(&mut RandomConfigBuilder)) -> Result<Self, ConfigError> {
        let mut builder = RandomConfig::builder();
        block(&mut builder);
        Ok(Self::with_config(builder.build()?))
    }

    /// Switch to a shared generator seeded with `seed`.
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            config: self.config,
            rng: RngSource::Seeded {
                seed,
                rng: Mutex::new(StdRng::seed_from_u64(seed)),
            },
        }
    }

    pub fn config(&self) -> &RandomConfig {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        match &self.rng {
            RngSource::Thread => None,
            RngSource::Seeded { seed, .. } => Some(*seed),
        }
    }

    fn with_rng<O>(&self, f: impl FnOnce(&mut dyn RngCore) -> O) -> O {
        match &self.rng {
            RngSource::Thread => f(&mut rand::rng()),
            RngSource::Seeded { rng, .. } => {
                // A panic elsewhere cannot leave a StdRng in a broken state.
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }

    /// Sample once from `pool`.
    pub fn sample<T: PoolValue>(&self, pool: &Pool<T>) -> T {
        self.with_rng(|rng| pool.random_with(rng))
    }

    /// Sample from the pool `block` specifies, or from `default` when it
    /// specifies nothing.
    pub fn sample_or<T: PoolValue>(
        &self,
        default: &Pool<T>,
        block: impl FnOnce(&mut PoolBuilder<T>),
    ) -> Result<T, PoolError> {
        let mut builder = PoolBuilder::new();
        block(&mut builder);
        let inline = builder.resolve()?;
        Ok(self.sample(inline.as_ref().unwrap_or(default)))
    }

    fn size_between(&self, min: usize, max: usize) -> Result<usize, PoolError> {
        let sizes = Pool::between(min, max)?;
        Ok(self.sample(&sizes))
    }

    /// String with the configured length and character pools.
    pub fn string(&self) -> String {
        self.with_rng(|rng| {
            generate_string(rng, self.config.string_length(), self.config.character())
        })
    }

    /// String whose length and character pools may be overridden inline.
    pub fn string_with(
        &self,
        length: impl FnOnce(&mut PoolBuilder<usize>),
        chars: impl FnOnce(&mut PoolBuilder<char>),
    ) -> Result<String, PoolError> {
        let mut length_builder = PoolBuilder::new();
        length(&mut length_builder);
        let mut chars_builder = PoolBuilder::new();
        chars(&mut chars_builder);

        let length = length_builder.resolve()?;
        let chars = chars_builder.resolve()?;
        let length = length.as_ref().unwrap_or(self.config.string_length());
        let chars = chars.as_ref().unwrap_or(self.config.character());
        Ok(self.with_rng(|rng| generate_string(rng, length, chars)))
    }

    pub fn character(&self) -> char {
        self.sample(self.config.character())
    }

    pub fn character_with(
        &self,
        block: impl FnOnce(&mut PoolBuilder<char>),
    ) -> Result<char, PoolError> {
        self.sample_or(self.config.character(), block)
    }

    pub fn integer(&self) -> i32 {
        self.sample(self.config.integer())
    }

    pub fn integer_with(
        &self,
        block: impl FnOnce(&mut PoolBuilder<i32>),
    ) -> Result<i32, PoolError> {
        self.sample_or(self.config.integer(), block)
    }

    pub fn long(&self) -> i64 {
        self.sample(self.config.long())
    }

    pub fn long_with(&self, block: impl FnOnce(&mut PoolBuilder<i64>)) -> Result<i64, PoolError> {
        self.sample_or(self.config.long(), block)
    }

    pub fn float(&self) -> f32 {
        self.sample(self.config.float())
    }

    pub fn float_with(&self, block: impl FnOnce(&mut PoolBuilder<f32>)) -> Result<f32, PoolError> {
        self.sample_or(self.config.float(), block)
    }

    pub fn double(&self) -> f64 {
        self.sample(self.config.double())
    }

    pub fn double_with(&self, block: impl FnOnce(&mut PoolBuilder<f64>)) -> Result<f64, PoolError> {
        self.sample_or(self.config.double(), block)
    }

    pub fn boolean(&self) -> bool {
        self.sample(self.config.boolean())
    }

    pub fn boolean_with(
        &self,
        block: impl FnOnce(&mut PoolBuilder<bool>),
    ) -> Result<bool, PoolError> {
        self.sample_or(self.config.boolean(), block)
    }

    /// `true` with the given probability.
    pub fn boolean_with_probability(&self, probability: f64) -> Result<bool, PoolError> {
        self.with_rng(|rng| weighted_bool(rng, probability))
    }

    pub fn time(&self) -> NaiveTime {
        self.sample(self.config.time())
    }

    pub fn time_with(
        &self,
        block: impl FnOnce(&mut PoolBuilder<NaiveTime>),
    ) -> Result<NaiveTime, PoolError> {
        self.sample_or(self.config.time(), block)
    }

    pub fn date(&self) -> NaiveDate {
        self.sample(self.config.date())
    }

    pub fn date_with(
        &self,
        block: impl FnOnce(&mut PoolBuilder<NaiveDate>),
    ) -> Result<NaiveDate, PoolError> {
        self.sample_or(self.config.date(), block)
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.sample(self.config.date_time())
    }

    pub fn date_time_with(
        &self,
        block: impl FnOnce(&mut PoolBuilder<NaiveDateTime>),
    ) -> Result<NaiveDateTime, PoolError> {
        self.sample_or(self.config.date_time(), block)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.sample(self.config.instant())
    }

    pub fn instant_with(
        &self,
        block: impl FnOnce(&mut PoolBuilder<DateTime<Utc>>),
    ) -> Result<DateTime<Utc>, PoolError> {
        self.sample_or(self.config.instant(), block)
    }

    pub fn zoned_date_time(&self) -> DateTime<FixedOffset> {
        self.sample(self.config.zoned_date_time())
    }

    pub fn zoned_date_time_with(
        &self,
        block: impl FnOnce(&mut PoolBuilder<DateTime<FixedOffset>>),
    ) -> Result<DateTime<FixedOffset>, PoolError> {
        self.sample_or(self.config.zoned_date_time(), block)
    }

    /// Zoned value from the configured pool, shown in `zone`.
    ///
    /// The instant is preserved; only the zone it is expressed in changes.
    pub fn zoned_date_time_in<Z: TimeZone>(&self, zone: &Z) -> DateTime<Z> {
        self.zoned_date_time().with_timezone(zone)
    }

    /// Random version 4 UUID.
    pub fn uuid(&self) -> Uuid {
        self.with_rng(|rng| generate_uuid_v4(rng))
    }

    /// String of `min..=max` characters from `charset`.
    pub fn string_from(
        &self,
        min: usize,
        max: usize,
        charset: &[char],
    ) -> Result<String, PoolError> {
        self.with_rng(|rng| generate_string_between(rng, min, max, charset))
    }

    pub fn alphabetic_string(&self, min: usize, max: usize) -> Result<String, PoolError> {
        self.string_from(min, max, &string::alphabetic())
    }

    pub fn alphanumeric_string(&self, min: usize, max: usize) -> Result<String, PoolError> {
        self.string_from(min, max, &string::alphanumeric())
    }

    pub fn numeric_string(&self, min: usize, max: usize) -> Result<String, PoolError> {
        self.string_from(min, max, &string::numeric())
    }

    /// List of `min..=max` values from `next`.
    pub fn list<T>(
        &self,
        min: usize,
        max: usize,
        next: impl FnMut() -> T,
    ) -> Result<Vec<T>, PoolError> {
        let target = self.size_between(min, max)?;
        Ok(collect_list(target, next))
    }

    /// Set of up to `min..=max` distinct values from `next`.
    ///
    /// May come back smaller than the drawn size when `next` keeps repeating
    /// itself.
    pub fn set<T: Eq + Hash>(
        &self,
        min: usize,
        max: usize,
        next: impl FnMut() -> T,
    ) -> Result<HashSet<T>, PoolError> {
        let target = self.size_between(min, max)?;
        Ok(collect_set(target, next))
    }

    /// Map of up to `min..=max` entries; keys behave as in [`Self::set`].
    pub fn map<K: Eq + Hash, V>(
        &self,
        min: usize,
        max: usize,
        next_key: impl FnMut() -> K,
        next_value: impl FnMut() -> V,
    ) -> Result<HashMap<K, V>, PoolError> {
        let target = self.size_between(min, max)?;
        Ok(collect_map(target, next_key, next_value))
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn one_of<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.with_rng(|rng| pick(rng, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::Tz;

    #[test]
    fn test_defaults_stay_in_range() {
        let random = FixtureRandom::new();
        for _ in 0..1000 {
            assert!((0..=100).contains(&random.integer()));
            assert!((0..=100).contains(&random.long()));
            let d = random.double();
            assert!((0.0..100.0).contains(&d));
            assert!(random.character().is_ascii_alphanumeric());
        }
    }

    #[test]
    fn test_inline_block_overrides_default() {
        let random = FixtureRandom::new();
        for _ in 0..100 {
            assert_eq!(
                random
                    .integer_with(|b| {
                        b.exactly(5);
                    })
                    .unwrap(),
                5
            );
        }
    }

    #[test]
    fn test_empty_inline_block_uses_default() {
        let random = FixtureRandom::configure(|c| {
            c.long(|b| {
                b.exactly(9);
            });
        })
        .unwrap();
        assert_eq!(random.long_with(|_| {}).unwrap(), 9);
        assert_eq!(random.long(), 9);
    }

    #[test]
    fn test_inline_conflict_is_reported() {
        let random = FixtureRandom::new();
        let result = random.integer_with(|b| {
            b.exactly(1).one_of([2, 3]);
        });
        assert!(matches!(
            result,
            Err(PoolError::ConflictingSpecification { .. })
        ));
    }

    #[test]
    fn test_zero_length_string_is_empty() {
        let random = FixtureRandom::new();
        for _ in 0..100 {
            let s = random
                .string_with(
                    |b| {
                        b.exactly(0);
                    },
                    |b| {
                        b.one_of(['x']);
                    },
                )
                .unwrap();
            assert!(s.is_empty());
        }
    }

    #[test]
    fn test_string_with_custom_chars() {
        let random = FixtureRandom::new();
        let s = random
            .string_with(
                |b| {
                    b.exactly(12);
                },
                |b| {
                    b.one_of_multiple([vec!['0', '1'], vec!['-']]);
                },
            )
            .unwrap();
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| matches!(c, '0' | '1' | '-')));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = FixtureRandom::new().seeded(42);
        let b = FixtureRandom::new().seeded(42);

        let first: Vec<i64> = (0..20).map(|_| a.long()).collect();
        let second: Vec<i64> = (0..20).map(|_| b.long()).collect();
        assert_eq!(first, second);
        assert_eq!(a.seed(), Some(42));
        assert_eq!(FixtureRandom::new().seed(), None);
    }

    #[test]
    fn test_boolean_with_probability() {
        let random = FixtureRandom::new().seeded(7);
        assert!(random.boolean_with_probability(1.0).unwrap());
        assert!(!random.boolean_with_probability(0.0).unwrap());
        assert_eq!(
            random.boolean_with_probability(1.5),
            Err(PoolError::InvalidProbability(1.5))
        );
    }

    #[test]
    fn test_time_has_whole_seconds() {
        let random = FixtureRandom::new();
        for _ in 0..100 {
            assert_eq!(random.time().nanosecond(), 0);
        }
    }

    #[test]
    fn test_zoned_date_time_in_preserves_instant() {
        let random = FixtureRandom::new().seeded(1);
        let zoned = random.zoned_date_time_in(&Tz::Asia__Tokyo);
        assert_eq!(zoned.timezone(), Tz::Asia__Tokyo);
        assert!(zoned.timestamp() >= 0);
    }

    #[test]
    fn test_charset_strings() {
        let random = FixtureRandom::new();
        let digits = random.numeric_string(4, 4).unwrap();
        assert_eq!(digits.len(), 4);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));

        let letters = random.alphabetic_string(1, 30).unwrap();
        assert!(letters.chars().all(|c| c.is_ascii_alphabetic()));

        assert!(random.alphanumeric_string(5, 2).is_err());
        assert_eq!(random.string_from(1, 2, &[]), Err(PoolError::EmptyDomain));
    }

    #[test]
    fn test_collections() {
        let random = FixtureRandom::new();

        let list = random.list(3, 3, || random.integer()).unwrap();
        assert_eq!(list.len(), 3);

        let set = random.set(0, 10, || random.uuid()).unwrap();
        assert!(set.len() <= 10);

        // Only two distinct keys exist, so the map stays undersized.
        let map = random
            .map(5, 5, || random.boolean(), || random.string())
            .unwrap();
        assert!(map.len() <= 2);
    }

    #[test]
    fn test_seeded_collections_release_the_generator() {
        let random = FixtureRandom::new().seeded(3);
        let list = random.list(4, 4, || random.integer()).unwrap();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_one_of() {
        let random = FixtureRandom::new();
        let items = ["red", "green"];
        assert!(items.contains(random.one_of(&items).unwrap()));
        assert_eq!(random.one_of::<i32>(&[]), None);
    }
}

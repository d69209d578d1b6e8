//! Whole-object randomizer.
//!
//! Types opt in by implementing [`Randomize`], populating themselves field by
//! field from an [`ObjectRandomizer`]. The randomizer owns a seeded RNG, the
//! size and depth limits from [`RandomizerConfig`], and a per-type override
//! table of [`Pool`]s consulted before any built-in default.
//!
//! ```rust
//! use fixture_generator::{ObjectRandomizer, Randomize, RandomizerConfig, TypeOverrides};
//! use fixture_core::Pool;
//!
//! struct User {
//!     name: String,
//!     age: i32,
//!     tags: Vec<String>,
//! }
//!
//! impl Randomize for User {
//!     fn randomize(r: &mut ObjectRandomizer) -> Self {
//!         Self {
//!             name: r.next_object(),
//!             age: r.next_object(),
//!             tags: r.next_object(),
//!         }
//!     }
//! }
//!
//! let mut overrides = TypeOverrides::new();
//! overrides.register(Pool::range(18..=80).unwrap());
//!
//! let mut randomizer = ObjectRandomizer::new(RandomizerConfig::default(), overrides).unwrap();
//! let user: User = randomizer.next_object();
//! assert!((18..=80).contains(&user.age));
//! ```

use crate::error::GeneratorError;
use crate::generators::{generate_string, generate_uuid_v4, string, temporal};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use fixture_core::{Pool, PoolValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use uuid::Uuid;

/// Options recognized by [`ObjectRandomizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomizerConfig {
    /// Seed for the randomizer's RNG; random when absent
    pub seed: Option<u64>,
    /// Inclusive bounds on generated collection sizes
    pub collection_size_range: (usize, usize),
    /// Inclusive bounds on generated string lengths
    pub string_length_range: (usize, usize),
    /// Maximum object nesting depth
    pub randomization_depth: usize,
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            collection_size_range: (1, 5),
            string_length_range: (5, 20),
            randomization_depth: 3,
        }
    }
}

impl RandomizerConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_collection_size_range(mut self, min: usize, max: usize) -> Self {
        self.collection_size_range = (min, max);
        self
    }

    pub fn with_string_length_range(mut self, min: usize, max: usize) -> Self {
        self.string_length_range = (min, max);
        self
    }

    pub fn with_randomization_depth(mut self, depth: usize) -> Self {
        self.randomization_depth = depth;
        self
    }
}

/// Per-type pool overrides, keyed by the value type.
#[derive(Clone, Default)]
pub struct TypeOverrides {
    pools: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl TypeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `pool` for every value of type `T`, replacing any earlier entry.
    pub fn register<T: PoolValue>(&mut self, pool: Pool<T>) -> &mut Self {
        self.pools.insert(TypeId::of::<T>(), Arc::new(pool));
        self
    }

    pub fn get<T: PoolValue>(&self) -> Option<&Pool<T>> {
        self.pools
            .get(&TypeId::of::<T>())
            .and_then(|pool| pool.downcast_ref::<Pool<T>>())
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl fmt::Debug for TypeOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeOverrides")
            .field("len", &self.pools.len())
            .finish()
    }
}

/// A type that can populate itself from an [`ObjectRandomizer`].
pub trait Randomize: Sized {
    fn randomize(randomizer: &mut ObjectRandomizer) -> Self;
}

/// Produces populated instances of [`Randomize`] types.
pub struct ObjectRandomizer {
    config: RandomizerConfig,
    overrides: TypeOverrides,
    rng: StdRng,
    seed: u64,
    depth: usize,
    collection_size: Pool<usize>,
    string_length: Pool<usize>,
    chars: Pool<char>,
}

impl ObjectRandomizer {
    /// Create a randomizer, validating the configured size ranges.
    pub fn new(config: RandomizerConfig, overrides: TypeOverrides) -> Result<Self, GeneratorError> {
        let (min, max) = config.collection_size_range;
        let collection_size =
            Pool::between(min, max).map_err(|source| GeneratorError::InvalidConfig {
                option: "collection_size_range",
                source,
            })?;
        let (min, max) = config.string_length_range;
        let string_length =
            Pool::between(min, max).map_err(|source| GeneratorError::InvalidConfig {
                option: "string_length_range",
                source,
            })?;
        let chars = Pool::one_of(string::alphanumeric())?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!(
            seed,
            depth = config.randomization_depth,
            overrides = overrides.len(),
            "created object randomizer"
        );

        Ok(Self {
            config,
            overrides,
            rng: StdRng::seed_from_u64(seed),
            seed,
            depth: 0,
            collection_size,
            string_length,
            chars,
        })
    }

    pub fn config(&self) -> &RandomizerConfig {
        &self.config
    }

    /// The seed actually in use, whether configured or drawn.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current nesting depth; zero outside of [`Self::next_object`].
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether nested objects may still be populated at the current depth.
    pub fn can_descend(&self) -> bool {
        self.depth < self.config.randomization_depth
    }

    /// Produce a populated `T` one level deeper than the caller.
    pub fn next_object<T: Randomize>(&mut self) -> T {
        self.depth += 1;
        let value = T::randomize(self);
        self.depth -= 1;
        value
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Sample the override registered for `T`, if any.
    pub fn overridden<T: PoolValue>(&mut self) -> Option<T> {
        let pool = self.overrides.get::<T>()?;
        Some(pool.random_with(&mut self.rng))
    }

    pub fn sample<T: PoolValue>(&mut self, pool: &Pool<T>) -> T {
        pool.random_with(&mut self.rng)
    }

    /// Alphanumeric string within the configured length range.
    pub fn string(&mut self) -> String {
        generate_string(&mut self.rng, &self.string_length, &self.chars)
    }

    /// Size for the next collection; zero once depth is exhausted.
    pub fn collection_size(&mut self) -> usize {
        if self.can_descend() {
            self.collection_size.random_with(&mut self.rng)
        } else {
            0
        }
    }

    fn sample_between<T: PoolValue>(&mut self, (lower, upper): (T, T)) -> T {
        match Pool::between(lower.clone(), upper) {
            Ok(pool) => pool.random_with(&mut self.rng),
            Err(_) => lower,
        }
    }
}

impl fmt::Debug for ObjectRandomizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRandomizer")
            .field("config", &self.config)
            .field("overrides", &self.overrides)
            .field("seed", &self.seed)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

macro_rules! randomize_standard {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Randomize for $ty {
                fn randomize(r: &mut ObjectRandomizer) -> Self {
                    r.overridden::<$ty>().unwrap_or_else(|| r.rng().random())
                }
            }
        )*
    };
}

randomize_standard!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! randomize_full_range {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Randomize for $ty {
                fn randomize(r: &mut ObjectRandomizer) -> Self {
                    r.overridden::<$ty>()
                        .unwrap_or_else(|| r.rng().random_range(<$ty>::MIN..=<$ty>::MAX))
                }
            }
        )*
    };
}

// Platform-width integers have no standard distribution.
randomize_full_range!(usize, isize);

impl Randomize for char {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        match r.overridden::<char>() {
            Some(c) => c,
            None => r.chars.random_with(&mut r.rng),
        }
    }
}

impl Randomize for String {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        r.overridden::<String>().unwrap_or_else(|| r.string())
    }
}

impl Randomize for Uuid {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        r.overridden::<Uuid>()
            .unwrap_or_else(|| generate_uuid_v4(r.rng()))
    }
}

impl Randomize for NaiveTime {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        r.overridden::<NaiveTime>()
            .unwrap_or_else(|| r.sample_between(temporal::time_bounds()))
    }
}

impl Randomize for NaiveDate {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        r.overridden::<NaiveDate>()
            .unwrap_or_else(|| r.sample_between(temporal::date_bounds()))
    }
}

impl Randomize for NaiveDateTime {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        r.overridden::<NaiveDateTime>()
            .unwrap_or_else(|| r.sample_between(temporal::date_time_bounds()))
    }
}

impl Randomize for DateTime<Utc> {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        r.overridden::<DateTime<Utc>>()
            .unwrap_or_else(|| r.sample_between(temporal::instant_bounds()))
    }
}

impl Randomize for DateTime<FixedOffset> {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        r.overridden::<DateTime<FixedOffset>>()
            .unwrap_or_else(|| r.sample_between(temporal::zoned_bounds()))
    }
}

impl<T: Randomize> Randomize for Option<T> {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        if r.can_descend() {
            Some(r.next_object())
        } else {
            None
        }
    }
}

impl<T: Randomize> Randomize for Box<T> {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        Box::new(T::randomize(r))
    }
}

impl<T: Randomize> Randomize for Vec<T> {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        let size = r.collection_size();
        (0..size).map(|_| r.next_object()).collect()
    }
}

impl<T: Randomize + Eq + Hash> Randomize for HashSet<T> {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        let size = r.collection_size();
        crate::generators::collect_set(size, || r.next_object())
    }
}

impl<K: Randomize + Eq + Hash, V: Randomize> Randomize for HashMap<K, V> {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        let size = r.collection_size();
        crate::generators::collect_entries(size, || (r.next_object(), r.next_object()))
    }
}

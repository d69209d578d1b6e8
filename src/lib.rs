//! fixturegen Library
//!
//! Randomized test fixtures built from configurable sampling pools.
//!
//! # Features
//!
//! - Pools: exact values, ranges and value sets for twelve value domains
//! - Configuration: per-domain defaults, set in code or loaded from YAML
//! - Facade: one call per domain, with inline per-call overrides
//! - Objects: whole values of [`Randomize`] types via [`Fixture`]
//!
//! # Crates
//!
//! - `fixture_core` - [`Pool`], [`PoolBuilder`], [`PoolSpec`] and the range sampler
//! - `fixture_generator` - string, collection, boolean and UUID generators
//!   and the [`ObjectRandomizer`]
//!
//! # CLI Usage
//!
//! ```bash
//! # Five integers from the default pool
//! fixturegen sample integer --count 5
//!
//! # Reproducible dates from a config file
//! fixturegen --config pools.yaml --seed 42 sample date
//!
//! # Hex strings of 8 to 16 characters
//! fixturegen string --length 8..16 --chars 0123456789abcdef
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixturegen::{default_random, FixtureRandom};
//!
//! let n = default_random().integer();
//! assert!((0..=100).contains(&n));
//!
//! let dice = FixtureRandom::configure(|c| {
//!     c.integer(|b| {
//!         b.between(1..=6);
//!     });
//! })
//! .unwrap();
//! assert!((1..=6).contains(&dice.integer()));
//! ```

pub mod config;
pub mod fixture;
pub mod global;
pub mod random;

pub use config::{ConfigError, RandomConfig, RandomConfigBuilder, RandomConfigFile};
pub use fixture::Fixture;
pub use global::default_random;
pub use random::FixtureRandom;

pub use fixture_core::{Domain, Pool, PoolBuilder, PoolError, PoolKind, PoolSpec, PoolValue};
pub use fixture_generator::{ObjectRandomizer, Randomize, RandomizerConfig, TypeOverrides};

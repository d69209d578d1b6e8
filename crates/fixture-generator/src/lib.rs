//! Value generators for fixturegen.
//!
//! This crate builds on the sampling engine in `fixture-core`:
//!
//! - [`generators`] - strings, collections, weighted booleans, UUIDs and the
//!   default temporal bounds
//! - [`ObjectRandomizer`] - populates whole values of types implementing
//!   [`Randomize`], honouring size and depth limits and per-type overrides
//!
//! # Architecture
//!
//! ```text
//! RandomizerConfig + TypeOverrides
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ ObjectRandomizer │
//! │                  │
//! │  - seed          │
//! │  - rng (StdRng)  │
//! │  - depth         │
//! └────────┬─────────┘
//!          │  Randomize::randomize
//!          ▼
//!      populated T
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::Pool;
//! use fixture_generator::generators::{collect_set, generate_string};
//! use rand::rngs::StdRng;
//! use rand::{Rng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let length = Pool::range(2..=3).unwrap();
//! let chars = Pool::one_of(['a', 'b', 'c', 'd', 'e']).unwrap();
//! let s = generate_string(&mut rng, &length, &chars);
//! assert!((2..=3).contains(&s.len()));
//!
//! let set = collect_set(3, || rng.random_range(0..10));
//! assert!(set.len() <= 3);
//! ```

pub mod error;
pub mod generators;
pub mod randomizer;

// Re-exports for convenience
pub use error::GeneratorError;
pub use randomizer::{ObjectRandomizer, Randomize, RandomizerConfig, TypeOverrides};

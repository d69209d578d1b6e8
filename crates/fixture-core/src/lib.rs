//! Sampling engine for fixturegen.
//!
//! This crate provides the pieces every generated fixture value flows
//! through:
//!
//! - [`RangeSampler`] - uniform sampling over any registered ordered domain
//! - [`Pool`] - immutable sampling strategy (unique, range, set membership)
//! - [`PoolSpec`] / [`PoolBuilder`] - descriptions that resolve into a pool
//! - [`Domain`] - the semantic categories that carry configurable defaults
//!
//! # Architecture
//!
//! ```text
//! PoolBuilder<T> ──resolve()──▶ PoolSpec<T> ──into_pool()──▶ Pool<T>
//!                                                              │
//!                                         RangeBound ──────────┤
//!                                                              ▼
//!                                                        RangeSampler
//!                                                              │
//!                                              PoolValue::range_conversion()
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Pool, PoolBuilder, PoolError};
//!
//! let mut builder = PoolBuilder::new();
//! builder.one_of(['a', 'b', 'c']);
//! let pool = builder.resolve().unwrap().unwrap();
//! assert!(['a', 'b', 'c'].contains(&pool.random()));
//!
//! let mut builder = PoolBuilder::new();
//! builder.exactly(1).between(1..=2);
//! assert!(matches!(
//!     builder.resolve(),
//!     Err(PoolError::ConflictingSpecification { .. })
//! ));
//!
//! assert_eq!(Pool::<i32>::one_of(vec![]), Err(PoolError::EmptyDomain));
//! ```

pub mod builder;
pub mod domain;
pub mod error;
pub mod pool;
pub mod sampler;

// Re-exports for convenience
pub use builder::{Directive, PoolBuilder, PoolSpec};
pub use domain::Domain;
pub use error::PoolError;
pub use pool::{Pool, PoolKind};
pub use sampler::{PoolValue, RangeConversion, RangeDomain, RangeSampler, UpperBound};

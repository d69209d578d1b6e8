//! Immutable sampling strategies.

use crate::error::PoolError;
use crate::sampler::{PoolValue, RangeConversion, RangeSampler, UpperBound};
use rand::Rng;
use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
enum Inner<T> {
    Unique(T),
    Range {
        lower: T,
        upper: T,
        conversion: RangeConversion<T>,
    },
    Set(Vec<T>),
}

/// Read-only view of a pool's variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoolKind<'a, T> {
    /// Always yields the stored value
    Unique(&'a T),
    /// Uniform over the bounds, per the domain's upper-bound policy
    RangeBound { lower: &'a T, upper: &'a T },
    /// Uniform over the members; duplicates weigh more
    SetMembership(&'a [T]),
}

/// An immutable, validated sampling strategy over values of type `T`.
///
/// Pools are checked once at construction and never change afterwards, so
/// they can be shared across threads freely.
///
/// ```rust
/// use fixture_core::Pool;
///
/// let pool = Pool::range(1..=10).unwrap();
/// let value = pool.random();
/// assert!((1..=10).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct Pool<T> {
    inner: Inner<T>,
}

impl<T: PoolValue> Pool<T> {
    /// Pool that always yields `value`.
    pub fn unique(value: T) -> Self {
        Self {
            inner: Inner::Unique(value),
        }
    }

    /// Range pool over `range`.
    pub fn range(range: RangeInclusive<T>) -> Result<Self, PoolError> {
        let (lower, upper) = range.into_inner();
        Self::between(lower, upper)
    }

    /// Range pool between `lower` and `upper`.
    ///
    /// Fails with [`PoolError::InvalidRange`] when `lower > upper` and with
    /// [`PoolError::UnsupportedDomain`] when `T` registers no conversion.
    pub fn between(lower: T, upper: T) -> Result<Self, PoolError> {
        let conversion = RangeSampler::conversion_for::<T>()?;
        conversion.validate(&lower, &upper)?;
        Ok(Self {
            inner: Inner::Range {
                lower,
                upper,
                conversion,
            },
        })
    }

    /// Set-membership pool over `values`, in iteration order.
    pub fn one_of<I>(values: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(PoolError::EmptyDomain);
        }
        Ok(Self {
            inner: Inner::Set(values),
        })
    }

    /// Set-membership pool over the concatenation of `sets`.
    pub fn one_of_multiple<I, J>(sets: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = T>,
    {
        Self::one_of(sets.into_iter().flatten())
    }

    /// Sample one value using the calling thread's generator.
    pub fn random(&self) -> T {
        self.random_with(&mut rand::rng())
    }

    /// Sample one value using `rng`.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        match &self.inner {
            Inner::Unique(value) => value.clone(),
            Inner::Range {
                lower,
                upper,
                conversion,
            } => conversion.sample(rng, lower, upper),
            Inner::Set(values) => values[rng.random_range(0..values.len())].clone(),
        }
    }

    pub fn kind(&self) -> PoolKind<'_, T> {
        match &self.inner {
            Inner::Unique(value) => PoolKind::Unique(value),
            Inner::Range { lower, upper, .. } => PoolKind::RangeBound { lower, upper },
            Inner::Set(values) => PoolKind::SetMembership(values),
        }
    }

    /// Whether `value` can be produced by this pool.
    pub fn contains(&self, value: &T) -> bool {
        match &self.inner {
            Inner::Unique(v) => v == value,
            Inner::Range {
                lower,
                upper,
                conversion,
            } => {
                let below_upper = match conversion.domain().upper_bound() {
                    UpperBound::Inclusive => value <= upper,
                    UpperBound::Exclusive => value < upper || (lower == upper && value == lower),
                };
                value >= lower && below_upper
            }
            Inner::Set(values) => values.contains(value),
        }
    }
}

impl<T: PoolValue> PartialEq for Pool<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

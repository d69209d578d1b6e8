//! Uniform range sampling across heterogeneous ordered types.
//!
//! A range pool is generic over its value type, so the sampler cannot rely on
//! the type parameter alone to pick an algorithm. Instead every type that may
//! back a range registers a [`RangeConversion`] through
//! [`PoolValue::range_conversion`]: a (to-representation, from-representation)
//! pair tagged with the [`RangeDomain`] it belongs to. Types without a
//! registration can still back unique and set-membership pools; asking for a
//! range over them fails with [`PoolError::UnsupportedDomain`].
//!
//! ## Bound policy
//!
//! | domain | representation | upper bound |
//! |---|---|---|
//! | integers, characters | integer / codepoint | inclusive |
//! | time of day | seconds since midnight | inclusive |
//! | calendar date | days since 1970-01-01 | inclusive |
//! | `f32`, `f64` | `f64` fraction scaling | exclusive |
//! | local date-time, instant, zoned | epoch seconds | exclusive |

use crate::error::PoolError;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc,
};
use chrono_tz::Tz;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i128 = 719_163;

/// First UTF-16 surrogate codepoint; `char` cannot hold these.
const SURROGATE_START: u32 = 0xD800;
/// Width of the surrogate block skipped by character sampling.
const SURROGATE_LEN: u32 = 0x800;

/// Family of ordered types with a registered range conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeDomain {
    /// Fixed-width integers
    Integral,
    /// Unicode scalar values, by codepoint
    Character,
    /// `f32` and `f64`
    Floating,
    /// Wall-clock time, by second of day
    TimeOfDay,
    /// Calendar date, by epoch day
    CalendarDate,
    /// Local date-time, via its UTC instant
    LocalDateTime,
    /// Point on the UTC timeline, by epoch second
    Instant,
    /// Instant with a zone attached
    ZonedDateTime,
}

/// Whether a domain's upper bound can be produced by sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    Inclusive,
    Exclusive,
}

impl RangeDomain {
    /// The upper-bound policy applied when sampling this domain.
    pub fn upper_bound(self) -> UpperBound {
        match self {
            RangeDomain::Integral
            | RangeDomain::Character
            | RangeDomain::TimeOfDay
            | RangeDomain::CalendarDate => UpperBound::Inclusive,
            RangeDomain::Floating
            | RangeDomain::LocalDateTime
            | RangeDomain::Instant
            | RangeDomain::ZonedDateTime => UpperBound::Exclusive,
        }
    }
}

enum Repr<T> {
    /// Reduced to an integer, sampled, rebuilt. The second argument of
    /// `from` is the lower bound, used as a template (e.g. for its zone).
    Integral {
        to: fn(&T) -> i128,
        from: fn(i128, &T) -> Option<T>,
    },
    /// Interpolated by a uniform fraction in `[0, 1)`.
    Floating { to: fn(&T) -> f64, from: fn(f64) -> T },
}

impl<T> Clone for Repr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Repr<T> {}

/// Registered conversion between a value type and a sampleable representation.
pub struct RangeConversion<T> {
    domain: RangeDomain,
    repr: Repr<T>,
}

impl<T> Clone for RangeConversion<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RangeConversion<T> {}

impl<T> fmt::Debug for RangeConversion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeConversion")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl<T: PartialOrd + Clone + fmt::Debug> RangeConversion<T> {
    /// Conversion through an integral representation.
    pub fn integral(
        domain: RangeDomain,
        to: fn(&T) -> i128,
        from: fn(i128, &T) -> Option<T>,
    ) -> Self {
        Self {
            domain,
            repr: Repr::Integral { to, from },
        }
    }

    /// Conversion through `f64` interpolation.
    pub fn floating(to: fn(&T) -> f64, from: fn(f64) -> T) -> Self {
        Self {
            domain: RangeDomain::Floating,
            repr: Repr::Floating { to, from },
        }
    }

    pub fn domain(&self) -> RangeDomain {
        self.domain
    }

    /// Check that `lower..=upper` is a range this conversion can sample.
    ///
    /// Bounds must be ordered; floating bounds must also be finite.
    pub fn validate(&self, lower: &T, upper: &T) -> Result<(), PoolError> {
        match lower.partial_cmp(upper) {
            Some(Ordering::Less | Ordering::Equal) => {}
            _ => return Err(PoolError::invalid_range(lower, upper)),
        }
        if let Repr::Floating { to, .. } = self.repr {
            if !to(lower).is_finite() || !to(upper).is_finite() {
                return Err(PoolError::invalid_range(lower, upper));
            }
        }
        Ok(())
    }

    /// Sample one value. Bounds must already have passed [`Self::validate`].
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R, lower: &T, upper: &T) -> T {
        let value = match self.repr {
            Repr::Integral { to, from } => {
                let lo = to(lower);
                let hi = to(upper);
                let picked = match self.domain.upper_bound() {
                    UpperBound::Inclusive => rng.random_range(lo..=hi),
                    UpperBound::Exclusive if lo < hi => rng.random_range(lo..hi),
                    UpperBound::Exclusive => lo,
                };
                from(picked, lower).unwrap_or_else(|| lower.clone())
            }
            Repr::Floating { to, from } => {
                let lo = to(lower);
                let hi = to(upper);
                let fraction: f64 = rng.random();
                from(lo * (1.0 - fraction) + hi * fraction)
            }
        };
        tracing::trace!(domain = ?self.domain, ?value, "sampled range value");
        self.contain(value, lower, upper)
    }

    /// Rounding and sub-second bounds can push a rebuilt value outside the
    /// interval; such values collapse to the lower bound.
    fn contain(&self, value: T, lower: &T, upper: &T) -> T {
        let past_upper = match self.domain.upper_bound() {
            UpperBound::Inclusive => value > *upper,
            UpperBound::Exclusive => value >= *upper && lower < upper,
        };
        if value < *lower || past_upper {
            lower.clone()
        } else {
            value
        }
    }
}

/// A value type that can populate a [`Pool`](crate::Pool).
///
/// Implementors that can be sampled over a range return their conversion
/// from [`PoolValue::range_conversion`]; the default is no conversion.
pub trait PoolValue: Clone + PartialOrd + fmt::Debug + Send + Sync + 'static {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        None
    }
}

/// Stateless dispatcher from a bounds pair to a uniformly sampled value.
pub struct RangeSampler;

impl RangeSampler {
    /// Sample uniformly between `lower` and `upper` using the conversion
    /// registered for `T`.
    pub fn sample<T: PoolValue, R: Rng + ?Sized>(
        rng: &mut R,
        lower: &T,
        upper: &T,
    ) -> Result<T, PoolError> {
        let conversion = Self::conversion_for::<T>()?;
        conversion.validate(lower, upper)?;
        Ok(conversion.sample(rng, lower, upper))
    }

    /// Look up the conversion registered for `T`.
    pub fn conversion_for<T: PoolValue>() -> Result<RangeConversion<T>, PoolError> {
        T::range_conversion().ok_or(PoolError::UnsupportedDomain {
            type_name: std::any::type_name::<T>(),
        })
    }
}

macro_rules! integral_pool_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PoolValue for $ty {
                fn range_conversion() -> Option<RangeConversion<Self>> {
                    Some(RangeConversion::integral(
                        RangeDomain::Integral,
                        |v| *v as i128,
                        |n, _| <$ty>::try_from(n).ok(),
                    ))
                }
            }
        )*
    };
}

integral_pool_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl PoolValue for f32 {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::floating(|v| f64::from(*v), |x| x as f32))
    }
}

impl PoolValue for f64 {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::floating(|v| *v, |x| x))
    }
}

fn char_to_index(c: &char) -> i128 {
    let code = u32::from(*c);
    let index = if code >= SURROGATE_START {
        code - SURROGATE_LEN
    } else {
        code
    };
    i128::from(index)
}

fn char_from_index(index: i128, _: &char) -> Option<char> {
    let index = u32::try_from(index).ok()?;
    let code = if index >= SURROGATE_START {
        index + SURROGATE_LEN
    } else {
        index
    };
    char::from_u32(code)
}

impl PoolValue for char {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::integral(
            RangeDomain::Character,
            char_to_index,
            char_from_index,
        ))
    }
}

impl PoolValue for NaiveTime {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::integral(
            RangeDomain::TimeOfDay,
            |t| i128::from(t.num_seconds_from_midnight()),
            |secs, _| {
                let secs = u32::try_from(secs).ok()?;
                NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
            },
        ))
    }
}

impl PoolValue for NaiveDate {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::integral(
            RangeDomain::CalendarDate,
            |d| i128::from(d.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE,
            |day, _| {
                let days_from_ce = i32::try_from(day + UNIX_EPOCH_DAYS_FROM_CE).ok()?;
                NaiveDate::from_num_days_from_ce_opt(days_from_ce)
            },
        ))
    }
}

fn instant_from_secs(secs: i128) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::try_from(secs).ok()?, 0)
}

impl PoolValue for NaiveDateTime {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::integral(
            RangeDomain::LocalDateTime,
            |dt| i128::from(dt.and_utc().timestamp()),
            |secs, _| instant_from_secs(secs).map(|dt| dt.naive_utc()),
        ))
    }
}

impl PoolValue for DateTime<Utc> {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::integral(
            RangeDomain::Instant,
            |dt| i128::from(dt.timestamp()),
            |secs, _| instant_from_secs(secs),
        ))
    }
}

impl PoolValue for DateTime<FixedOffset> {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::integral(
            RangeDomain::ZonedDateTime,
            |dt| i128::from(dt.timestamp()),
            |secs, lower| instant_from_secs(secs).map(|dt| dt.with_timezone(&lower.timezone())),
        ))
    }
}

impl PoolValue for DateTime<Tz> {
    fn range_conversion() -> Option<RangeConversion<Self>> {
        Some(RangeConversion::integral(
            RangeDomain::ZonedDateTime,
            |dt| i128::from(dt.timestamp()),
            |secs, lower| instant_from_secs(secs).map(|dt| dt.with_timezone(&lower.timezone())),
        ))
    }
}

impl PoolValue for bool {}

impl PoolValue for String {}

impl PoolValue for Uuid {}

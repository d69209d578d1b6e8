//! Pool specifications and the sparse builder that resolves into them.
//!
//! [`PoolSpec`] is the tagged form: exactly one directive, so conflicting
//! combinations cannot be expressed. [`PoolBuilder`] is the incremental form
//! used by per-call overrides and configuration blocks; it accepts any
//! combination of directives and reports conflicts when resolved.

use crate::error::PoolError;
use crate::pool::Pool;
use crate::sampler::PoolValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// One of the four mutually exclusive ways to describe a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Exactly,
    Between,
    OneOf,
    OneOfMultiple,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Directive::Exactly => "exactly",
            Directive::Between => "between",
            Directive::OneOf => "one_of",
            Directive::OneOfMultiple => "one_of_multiple",
        };
        f.write_str(name)
    }
}

/// A single pool directive.
///
/// Serialized with an internal `type` tag:
///
/// ```yaml
/// type: between
/// lower: 1
/// upper: 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PoolSpec<T> {
    /// Always the given value
    Exactly { value: T },

    /// Uniform between the bounds
    Between { lower: T, upper: T },

    /// Uniform over the values
    OneOf { values: Vec<T> },

    /// Uniform over the union of several value lists
    OneOfMultiple { sets: Vec<Vec<T>> },
}

impl<T> PoolSpec<T> {
    pub fn directive(&self) -> Directive {
        match self {
            PoolSpec::Exactly { .. } => Directive::Exactly,
            PoolSpec::Between { .. } => Directive::Between,
            PoolSpec::OneOf { .. } => Directive::OneOf,
            PoolSpec::OneOfMultiple { .. } => Directive::OneOfMultiple,
        }
    }
}

impl<T: PoolValue> PoolSpec<T> {
    /// Build the validated pool this directive describes.
    pub fn into_pool(self) -> Result<Pool<T>, PoolError> {
        match self {
            PoolSpec::Exactly { value } => Ok(Pool::unique(value)),
            PoolSpec::Between { lower, upper } => Pool::between(lower, upper),
            PoolSpec::OneOf { values } => Pool::one_of(values),
            PoolSpec::OneOfMultiple { sets } => Pool::one_of_multiple(sets),
        }
    }
}

/// Sparse, short-lived pool description.
///
/// Directives may be set in any combination; [`PoolBuilder::resolve`] yields
/// `None` when nothing was set, the matching pool when exactly one was set,
/// and [`PoolError::ConflictingSpecification`] otherwise.
///
/// ```rust
/// use fixture_core::PoolBuilder;
///
/// let mut builder = PoolBuilder::new();
/// builder.between(2..=3);
/// let pool = builder.resolve().unwrap().unwrap();
/// assert!((2..=3).contains(&pool.random()));
/// ```
#[derive(Debug, Clone)]
pub struct PoolBuilder<T> {
    exactly: Option<T>,
    between: Option<(T, T)>,
    one_of: Option<Vec<T>>,
    one_of_multiple: Option<Vec<Vec<T>>>,
}

impl<T> Default for PoolBuilder<T> {
    fn default() -> Self {
        Self {
            exactly: None,
            between: None,
            one_of: None,
            one_of_multiple: None,
        }
    }
}

impl<T: PoolValue> PoolBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exactly(&mut self, value: T) -> &mut Self {
        self.exactly = Some(value);
        self
    }

    pub fn between(&mut self, range: RangeInclusive<T>) -> &mut Self {
        self.between = Some(range.into_inner());
        self
    }

    pub fn one_of<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.one_of = Some(values.into_iter().collect());
        self
    }

    pub fn one_of_multiple<I, J>(&mut self, sets: I) -> &mut Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = T>,
    {
        self.one_of_multiple = Some(
            sets.into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
        );
        self
    }

    /// Populate the slot matching `spec`, leaving the others untouched.
    pub fn apply(&mut self, spec: PoolSpec<T>) -> &mut Self {
        match spec {
            PoolSpec::Exactly { value } => self.exactly = Some(value),
            PoolSpec::Between { lower, upper } => self.between = Some((lower, upper)),
            PoolSpec::OneOf { values } => self.one_of = Some(values),
            PoolSpec::OneOfMultiple { sets } => self.one_of_multiple = Some(sets),
        }
        self
    }

    /// Directives currently populated, in declaration order.
    pub fn populated(&self) -> Vec<Directive> {
        let mut directives = Vec::new();
        if self.exactly.is_some() {
            directives.push(Directive::Exactly);
        }
        if self.between.is_some() {
            directives.push(Directive::Between);
        }
        if self.one_of.is_some() {
            directives.push(Directive::OneOf);
        }
        if self.one_of_multiple.is_some() {
            directives.push(Directive::OneOfMultiple);
        }
        directives
    }

    pub fn is_empty(&self) -> bool {
        self.populated().is_empty()
    }

    /// Collapse into a single directive, if any.
    pub fn into_spec(self) -> Result<Option<PoolSpec<T>>, PoolError> {
        if let [first, second, ..] = self.populated()[..] {
            return Err(PoolError::ConflictingSpecification { first, second });
        }

        let spec = match self {
            PoolBuilder {
                exactly: Some(value),
                ..
            } => PoolSpec::Exactly { value },
            PoolBuilder {
                between: Some((lower, upper)),
                ..
            } => PoolSpec::Between { lower, upper },
            PoolBuilder {
                one_of: Some(values),
                ..
            } => PoolSpec::OneOf { values },
            PoolBuilder {
                one_of_multiple: Some(sets),
                ..
            } => PoolSpec::OneOfMultiple { sets },
            _ => return Ok(None),
        };
        Ok(Some(spec))
    }

    /// Resolve into a validated pool, or `None` when nothing was specified.
    pub fn resolve(self) -> Result<Option<Pool<T>>, PoolError> {
        match self.into_spec()? {
            Some(spec) => {
                tracing::debug!(directive = %spec.directive(), "resolved pool builder");
                spec.into_pool().map(Some)
            }
            None => Ok(None),
        }
    }
}

impl<T> From<PoolSpec<T>> for PoolBuilder<T>
where
    T: PoolValue,
{
    fn from(spec: PoolSpec<T>) -> Self {
        let mut builder = PoolBuilder::new();
        builder.apply(spec);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::PoolKind;
    use proptest::prelude::*;

    fn all_directives() -> [Directive; 4] {
        [
            Directive::Exactly,
            Directive::Between,
            Directive::OneOf,
            Directive::OneOfMultiple,
        ]
    }

    fn set(builder: &mut PoolBuilder<i32>, directive: Directive) {
        match directive {
            Directive::Exactly => builder.exactly(5),
            Directive::Between => builder.between(1..=10),
            Directive::OneOf => builder.one_of([1, 2, 3]),
            Directive::OneOfMultiple => builder.one_of_multiple([vec![1], vec![2]]),
        };
    }

    #[test]
    fn test_empty_builder_resolves_to_none() {
        let builder = PoolBuilder::<i32>::new();
        assert!(builder.is_empty());
        assert_eq!(builder.resolve(), Ok(None));
    }

    #[test]
    fn test_exactly_resolves_to_unique() {
        let mut builder = PoolBuilder::new();
        builder.exactly(5);
        let pool = builder.resolve().unwrap().unwrap();

        assert_eq!(pool.kind(), PoolKind::Unique(&5));
        for _ in 0..100 {
            assert_eq!(pool.random(), 5);
        }
    }

    #[test]
    fn test_between_resolves_to_range() {
        let mut builder = PoolBuilder::new();
        builder.between(2..=3);
        let pool = builder.resolve().unwrap().unwrap();
        assert_eq!(
            pool.kind(),
            PoolKind::RangeBound {
                lower: &2,
                upper: &3
            }
        );
    }

    #[test]
    fn test_one_of_multiple_resolves_flattened() {
        let mut builder = PoolBuilder::new();
        builder.one_of_multiple(['a'..='c', 'x'..='y']);
        let pool = builder.resolve().unwrap().unwrap();
        assert_eq!(
            pool.kind(),
            PoolKind::SetMembership(&['a', 'b', 'c', 'x', 'y'][..])
        );
    }

    #[test]
    fn test_between_and_one_of_conflict() {
        let mut builder = PoolBuilder::new();
        builder.between('a'..='b').one_of(['a', 'b']);
        assert_eq!(
            builder.resolve(),
            Err(PoolError::ConflictingSpecification {
                first: Directive::Between,
                second: Directive::OneOf,
            })
        );
    }

    #[test]
    fn test_every_pair_conflicts() {
        let directives = all_directives();
        for (i, first) in directives.iter().enumerate() {
            for second in &directives[i + 1..] {
                let mut builder = PoolBuilder::new();
                set(&mut builder, *first);
                set(&mut builder, *second);
                assert_eq!(
                    builder.resolve(),
                    Err(PoolError::ConflictingSpecification {
                        first: *first,
                        second: *second,
                    })
                );
            }
        }
    }

    #[test]
    fn test_validation_errors_surface_on_resolve() {
        let mut builder = PoolBuilder::<i32>::new();
        builder.one_of(Vec::new());
        assert_eq!(builder.resolve(), Err(PoolError::EmptyDomain));

        let mut builder = PoolBuilder::new();
        builder.exactly(1.0).between(0.0..=1.0).one_of([0.5]);
        assert!(matches!(
            builder.resolve(),
            Err(PoolError::ConflictingSpecification {
                first: Directive::Exactly,
                second: Directive::Between,
            })
        ));
    }

    #[test]
    fn test_apply_spec() {
        let mut builder = PoolBuilder::new();
        builder.apply(PoolSpec::Between {
            lower: 1u8,
            upper: 2,
        });
        assert_eq!(builder.populated(), vec![Directive::Between]);

        let builder: PoolBuilder<u8> = PoolSpec::Exactly { value: 9 }.into();
        assert_eq!(builder.into_spec(), Ok(Some(PoolSpec::Exactly { value: 9 })));
    }

    #[test]
    fn test_spec_from_yaml() {
        let spec: PoolSpec<i32> =
            serde_yaml::from_str("type: between\nlower: 1\nupper: 10").unwrap();
        assert_eq!(spec, PoolSpec::Between { lower: 1, upper: 10 });
        assert_eq!(spec.directive(), Directive::Between);

        let spec: PoolSpec<char> =
            serde_yaml::from_str("type: one_of_multiple\nsets: [[a, b], [c]]").unwrap();
        let pool = spec.into_pool().unwrap();
        assert_eq!(pool.kind(), PoolKind::SetMembership(&['a', 'b', 'c'][..]));
    }

    #[test]
    fn test_conflict_message_names_pair() {
        let err = PoolError::ConflictingSpecification {
            first: Directive::Exactly,
            second: Directive::OneOfMultiple,
        };
        assert_eq!(
            err.to_string(),
            "Cannot specify 'exactly' together with 'one_of_multiple'"
        );
    }

    proptest! {
        #[test]
        fn prop_any_two_or_more_directives_conflict(mask in 0u8..16) {
            let mut builder = PoolBuilder::new();
            let chosen: Vec<Directive> = all_directives()
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, d)| d)
                .collect();
            for directive in &chosen {
                set(&mut builder, *directive);
            }

            let result = builder.resolve();
            match chosen.len() {
                0 => prop_assert_eq!(result, Ok(None)),
                1 => prop_assert!(matches!(result, Ok(Some(_)))),
                _ => prop_assert!(
                    matches!(result, Err(PoolError::ConflictingSpecification { .. })),
                    "expected conflict"
                ),
            }
        }
    }
}

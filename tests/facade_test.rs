//! Facade behavior across all domains.

use chrono::{Datelike, NaiveDate, NaiveTime};
use fixturegen::{FixtureRandom, PoolError, RandomConfig};
use proptest::prelude::*;

#[test]
fn test_default_string_length_within_bounds() {
    let random = FixtureRandom::new();
    for _ in 0..1000 {
        let len = random.string().chars().count();
        assert!((1..=10).contains(&len), "length {len} out of range");
    }

    let config = RandomConfig::default();
    for _ in 0..1000 {
        assert!((1..=10).contains(&config.string_length().random()));
    }
}

#[test]
fn test_zero_length_string() {
    let random = FixtureRandom::new();
    for _ in 0..100 {
        let s = random
            .string_with(
                |b| {
                    b.exactly(0);
                },
                |_| {},
            )
            .unwrap();
        assert_eq!(s, "");
    }
}

#[test]
fn test_exactly_five() {
    let random = FixtureRandom::new();
    for _ in 0..100 {
        let n = random
            .integer_with(|b| {
                b.exactly(5);
            })
            .unwrap();
        assert_eq!(n, 5);
    }
}

#[test]
fn test_conflicting_inline_directives() {
    let random = FixtureRandom::new();
    let result = random.character_with(|b| {
        b.between('a'..='c').one_of(['x', 'y']);
    });
    assert!(matches!(
        result,
        Err(PoolError::ConflictingSpecification { .. })
    ));
}

#[test]
fn test_configured_instance() {
    let random = FixtureRandom::configure(|c| {
        c.date(|b| {
            let first = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
            let last = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
            b.between(first..=last);
        })
        .time(|b| {
            b.exactly(NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        })
        .float(|b| {
            b.between(-1.0..=1.0);
        });
    })
    .unwrap();

    for _ in 0..200 {
        let date = random.date();
        assert_eq!((date.year(), date.month()), (2024, 2));
        assert_eq!(random.time(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        let f = random.float();
        assert!((-1.0..1.0).contains(&f));
    }
}

#[test]
fn test_default_temporal_values_in_range() {
    let random = FixtureRandom::new();
    let earliest = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let latest = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();

    for _ in 0..500 {
        let date = random.date();
        assert!(date >= earliest && date <= latest);

        let date_time = random.date_time();
        assert!(date_time.date() >= earliest && date_time.date() <= latest);

        let instant = random.instant();
        assert!(instant.timestamp() >= 0);
        assert!(instant.date_naive() <= latest);

        let zoned = random.zoned_date_time();
        assert_eq!(zoned.offset().local_minus_utc(), 0);
    }
}

#[test]
fn test_boolean_observes_both_values() {
    let random = FixtureRandom::new().seeded(42);
    let values: Vec<bool> = (0..200).map(|_| random.boolean()).collect();
    assert!(values.contains(&true));
    assert!(values.contains(&false));
}

#[test]
fn test_invalid_probability() {
    let random = FixtureRandom::new();
    assert_eq!(
        random.boolean_with_probability(-0.1),
        Err(PoolError::InvalidProbability(-0.1))
    );
    assert!(random.boolean_with_probability(f64::NAN).is_err());
}

#[test]
fn test_seeded_instances_repeat() {
    let a = FixtureRandom::new().seeded(99);
    let b = FixtureRandom::new().seeded(99);
    for _ in 0..50 {
        assert_eq!(a.string(), b.string());
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.instant(), b.instant());
    }
}

proptest! {
    #[test]
    fn prop_inline_range_contains_samples(a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let random = FixtureRandom::new();
        let v = random.long_with(|p| { p.between(lo..=hi); }).unwrap();
        prop_assert!(lo <= v && v <= hi);
    }

    #[test]
    fn prop_string_from_uses_charset(min in 0usize..10, extra in 0usize..10) {
        let random = FixtureRandom::new();
        let s = random.string_from(min, min + extra, &['q', 'r']).unwrap();
        prop_assert!(s.len() >= min && s.len() <= min + extra);
        prop_assert!(s.chars().all(|c| c == 'q' || c == 'r'));
    }
}

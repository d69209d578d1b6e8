//! Whole-object fixtures.

use chrono::{DateTime, Utc};
use fixturegen::fixture::default_overrides;
use fixturegen::{
    Fixture, ObjectRandomizer, Pool, RandomConfig, Randomize, RandomizerConfig, TypeOverrides,
};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: Uuid,
    quantity: i32,
    placed_at: DateTime<Utc>,
    notes: Option<String>,
    lines: Vec<Line>,
    attributes: HashMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq)]
struct Line {
    sku: String,
    price: f64,
}

impl Randomize for Line {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        Self {
            sku: r.next_object(),
            price: r.next_object(),
        }
    }
}

impl Randomize for Order {
    fn randomize(r: &mut ObjectRandomizer) -> Self {
        Self {
            id: r.next_object(),
            quantity: r.next_object(),
            placed_at: r.next_object(),
            notes: r.next_object(),
            lines: r.next_object(),
            attributes: r.next_object(),
        }
    }
}

#[test]
fn test_create_populates_nested_values() {
    let orders = Fixture::<Order>::new().unwrap();
    for _ in 0..50 {
        let order = orders.create();
        assert!((0..=100).contains(&order.quantity));
        assert!(order.lines.len() <= 5);
        assert!(order.attributes.len() <= 5);
        for line in &order.lines {
            assert!((5..=20).contains(&line.sku.chars().count()));
        }
    }
}

#[test]
fn test_overrides_from_random_config() {
    let mut builder = RandomConfig::builder();
    builder
        .integer(|b| {
            b.exactly(3);
        })
        .double(|b| {
            b.between(1.0..=2.0);
        });
    let overrides = builder.build().unwrap().to_type_overrides();

    let orders = Fixture::<Order>::with_config(RandomizerConfig::default(), overrides).unwrap();
    let order = orders.create();
    assert_eq!(order.quantity, 3);
    for line in &order.lines {
        assert!((1.0..2.0).contains(&line.price));
    }
}

#[test]
fn test_shallow_depth_leaves_collections_empty() {
    let config = RandomizerConfig::default().with_randomization_depth(1);
    let mut overrides = TypeOverrides::new();
    overrides.register(Pool::unique(7i32));

    let orders = Fixture::<Order>::with_config(config, overrides).unwrap();
    let order = orders.create();
    assert_eq!(order.quantity, 7);
    assert!(order.notes.is_none());
    assert!(order.lines.is_empty());
    assert!(order.attributes.is_empty());
}

#[test]
fn test_customizers() {
    let orders = Fixture::<Order>::with_defaults(|o| o.notes = Some("default".into())).unwrap();

    let order = orders.create();
    assert_eq!(order.notes.as_deref(), Some("default"));

    let order = orders.create_with(|o| o.quantity = 1000);
    assert_eq!(order.quantity, 1000);
    assert_eq!(order.notes.as_deref(), Some("default"));
}

#[test]
fn test_seeded_fixtures_repeat() {
    let config = RandomizerConfig::default().with_seed(2024);
    let a = Fixture::<Order>::with_config(config.clone(), default_overrides()).unwrap();
    let b = Fixture::<Order>::with_config(config, default_overrides()).unwrap();
    assert_eq!(a.create(), b.create());
}

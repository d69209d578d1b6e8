//! Collection generators.
//!
//! Sets and maps stop after `target * RETRY_FACTOR` draws even if duplicate
//! draws kept them short of the target size; an undersized result is
//! returned rather than an error.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Draws allowed per requested element when duplicates are rejected.
pub const RETRY_FACTOR: usize = 3;

/// Collect exactly `target` generated items.
pub fn collect_list<T, F>(target: usize, next: F) -> Vec<T>
where
    F: FnMut() -> T,
{
    std::iter::repeat_with(next).take(target).collect()
}

/// Collect up to `target` distinct generated items.
pub fn collect_set<T, F>(target: usize, mut next: F) -> HashSet<T>
where
    T: Eq + Hash,
    F: FnMut() -> T,
{
    let mut result = HashSet::with_capacity(target);
    let max_attempts = target.saturating_mul(RETRY_FACTOR);
    let mut attempts = 0;

    while result.len() < target && attempts < max_attempts {
        result.insert(next());
        attempts += 1;
    }

    if result.len() < target {
        tracing::debug!(
            target,
            produced = result.len(),
            attempts,
            "set generation hit retry cap"
        );
    }
    result
}

/// Collect up to `target` entries with distinct generated keys.
///
/// A repeated key overwrites the earlier value.
pub fn collect_map<K, V, FK, FV>(
    target: usize,
    mut next_key: FK,
    mut next_value: FV,
) -> HashMap<K, V>
where
    K: Eq + Hash,
    FK: FnMut() -> K,
    FV: FnMut() -> V,
{
    collect_entries(target, || (next_key(), next_value()))
}

/// Like [`collect_map`], drawing each key and value together from `next`.
pub fn collect_entries<K, V, F>(target: usize, mut next: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut() -> (K, V),
{
    let mut result = HashMap::with_capacity(target);
    let max_attempts = target.saturating_mul(RETRY_FACTOR);
    let mut attempts = 0;

    while result.len() < target && attempts < max_attempts {
        let (key, value) = next();
        result.insert(key, value);
        attempts += 1;
    }

    if result.len() < target {
        tracing::debug!(
            target,
            produced = result.len(),
            attempts,
            "map generation hit retry cap"
        );
    }
    result
}

/// Pick one item uniformly, or `None` for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_collect_list() {
        let mut counter = 0;
        let list = collect_list(4, || {
            counter += 1;
            counter
        });
        assert_eq!(list, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_collect_set_reaches_target() {
        let mut rng = StdRng::seed_from_u64(42);
        let set = collect_set(5, || rng.random_range(0..1_000_000));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_collect_set_undersized_at_retry_cap() {
        let mut attempts = 0;
        let set = collect_set(4, || {
            attempts += 1;
            7
        });
        assert_eq!(set.len(), 1);
        assert_eq!(attempts, 4 * RETRY_FACTOR);
    }

    #[test]
    fn test_collect_set_zero_target() {
        let set: HashSet<i32> = collect_set(0, || unreachable!());
        assert!(set.is_empty());
    }

    #[test]
    fn test_collect_map() {
        let mut key = 0;
        let map = collect_map(
            3,
            || {
                key += 1;
                key
            },
            || "v",
        );
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&1), Some(&"v"));
    }

    #[test]
    fn test_collect_map_undersized() {
        let map = collect_map(3, || "same", || 1);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_collect_entries_stops_at_retry_cap() {
        let mut attempts = 0;
        let map = collect_entries(5, || {
            attempts += 1;
            (attempts % 2 == 0, attempts)
        });
        assert_eq!(map.len(), 2);
        assert_eq!(attempts, 5 * RETRY_FACTOR);
        assert_eq!(map.get(&false), Some(&15));
    }

    #[test]
    fn test_pick() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        for _ in 0..20 {
            assert!(items.contains(pick(&mut rng, &items).unwrap()));
        }

        let empty: [i32; 0] = [];
        assert_eq!(pick(&mut rng, &empty), None);
    }
}

//! Limit computation.
//!
//! # Algorithm
//!
//! For position `i` holding key `k`:
//!
//! 1. Walk `i-1` down to `0`; the first key in `predecessors_of(k)` at `j`
//!    gives `left = i - j - 1`.
//! 2. Walk `i+1` up to the end; the first key in `successors_of(k)` at `j`
//!    gives `right = j - i - 1`.
//!
//! Only the nearest bound on each side matters, regardless of the order in
//! which rules were added.

use std::borrow::Borrow;
use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::{MovementLimit, Violation};
use crate::key::KeyEncoder;
use crate::rules::{Bounds, RuleIndex};

/// Computes the movement limit of every position in `sequence`.
///
/// # Examples
///
/// ```
/// use u_precedence::key::Identity;
/// use u_precedence::limits::compute_limits;
/// use u_precedence::rules::RuleIndex;
///
/// let mut rules = RuleIndex::new();
/// rules.add_rule('b', 'd');
///
/// let limits = compute_limits(&['a', 'b', 'c', 'd'], &rules, &Identity);
/// assert_eq!(limits[1].left, None);
/// assert_eq!(limits[1].right, Some(1));
/// ```
pub fn compute_limits<T, E>(
    sequence: &[T],
    rules: &RuleIndex<E::Key>,
    encoder: &E,
) -> Vec<MovementLimit>
where
    E: KeyEncoder<T>,
{
    let keys: Vec<E::Key> = sequence.iter().map(|item| encoder.encode(item)).collect();
    (0..keys.len()).map(|i| scan(&keys, rules, i)).collect()
}

/// Parallel version of [`compute_limits`]. Produces the same result.
#[cfg(feature = "parallel")]
pub fn compute_limits_par<T, E>(
    sequence: &[T],
    rules: &RuleIndex<E::Key>,
    encoder: &E,
) -> Vec<MovementLimit>
where
    T: Sync,
    E: KeyEncoder<T> + Sync,
    E::Key: Send + Sync,
{
    let keys: Vec<E::Key> = sequence
        .par_iter()
        .map(|item| encoder.encode(item))
        .collect();
    (0..keys.len())
        .into_par_iter()
        .map(|i| scan(&keys, rules, i))
        .collect()
}

/// Computes the movement limit of a single position.
///
/// Returns `None` if `index` is out of bounds. Keys are encoded lazily, so
/// the cost is proportional to the distance to the nearest bounds.
pub fn limit_at<T, E>(
    sequence: &[T],
    rules: &RuleIndex<E::Key>,
    encoder: &E,
    index: usize,
) -> Option<MovementLimit>
where
    E: KeyEncoder<T>,
{
    let key = encoder.encode(sequence.get(index)?);
    let left = nearest(
        sequence[..index].iter().rev().map(|item| encoder.encode(item)),
        rules.predecessors_of(&key),
    );
    let right = nearest(
        sequence[index + 1..].iter().map(|item| encoder.encode(item)),
        rules.successors_of(&key),
    );
    Some(MovementLimit::new(left, right))
}

/// Finds the leftmost item that sits ahead of one of its required
/// predecessors.
///
/// Returns `None` when every stored rule holds for `sequence`.
pub fn first_violation<T, E>(
    sequence: &[T],
    rules: &RuleIndex<E::Key>,
    encoder: &E,
) -> Option<Violation>
where
    E: KeyEncoder<T>,
{
    let keys: Vec<E::Key> = sequence.iter().map(|item| encoder.encode(item)).collect();
    keys.iter().enumerate().find_map(|(i, key)| {
        nearest(keys[i + 1..].iter(), rules.predecessors_of(key)).map(|d| Violation {
            predecessor: i + 1 + d,
            successor: i,
        })
    })
}

fn scan<K>(keys: &[K], rules: &RuleIndex<K>, i: usize) -> MovementLimit
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    let key = &keys[i];
    let left = nearest(keys[..i].iter().rev(), rules.predecessors_of(key));
    let right = nearest(keys[i + 1..].iter(), rules.successors_of(key));
    MovementLimit::new(left, right)
}

/// Number of keys walked past before the first one in `bounds`.
fn nearest<K, Q, I>(keys: I, bounds: Bounds<'_, K>) -> Option<usize>
where
    K: Eq + Hash,
    Q: Borrow<K>,
    I: IntoIterator<Item = Q>,
{
    if bounds.is_empty() {
        return None;
    }
    keys.into_iter().position(|k| bounds.contains(k.borrow()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{key_fn, Identity};

    fn rules(pairs: &[(char, char)]) -> RuleIndex<char> {
        let mut index = RuleIndex::new();
        for &(p, s) in pairs {
            index.add_rule(p, s);
        }
        index
    }

    #[test]
    fn test_empty_sequence() {
        let index = rules(&[('a', 'b')]);
        let limits = compute_limits::<char, _>(&[], &index, &Identity);
        assert!(limits.is_empty());
    }

    #[test]
    fn test_no_rules_all_unbounded() {
        let index = rules(&[]);
        let limits = compute_limits(&['a', 'b', 'c'], &index, &Identity);
        assert_eq!(limits.len(), 3);
        assert!(limits.iter().all(MovementLimit::is_unbounded));
    }

    #[test]
    fn test_bound_not_in_sequence() {
        let index = rules(&[('a', 'z')]);
        let limits = compute_limits(&['a', 'b', 'c'], &index, &Identity);
        assert!(limits[0].is_unbounded());
    }

    #[test]
    fn test_single_bound() {
        let index = rules(&[('b', 'd')]);
        let limits = compute_limits(&['a', 'b', 'c', 'd'], &index, &Identity);
        assert_eq!(limits[1], MovementLimit::new(None, Some(1)));
        assert_eq!(limits[3], MovementLimit::new(Some(1), None));
    }

    #[test]
    fn test_nearest_of_two_bounds() {
        let index = rules(&[('a', 'c'), ('a', 'd')]);
        let limits = compute_limits(&['a', 'b', 'c', 'd'], &index, &Identity);
        assert_eq!(limits[0], MovementLimit::new(None, Some(1)));
        assert_eq!(limits[3], MovementLimit::new(Some(2), None));
    }

    #[test]
    fn test_adjacent_bounds() {
        let index = rules(&[('a', 'b'), ('a', 'c')]);
        let limits = compute_limits(&['a', 'b', 'c'], &index, &Identity);
        assert_eq!(limits[0], MovementLimit::new(None, Some(0)));
        assert_eq!(limits[1], MovementLimit::new(Some(0), None));
        assert_eq!(limits[2], MovementLimit::new(Some(1), None));
    }

    #[test]
    fn test_limits_use_encoded_keys() {
        let mut index = RuleIndex::new();
        index.add_rule(1usize, 3usize);
        let by_len = key_fn(|s: &&str| s.len());

        let limits = compute_limits(&["x", "yy", "q", "zzz"], &index, &by_len);
        assert_eq!(limits[0], MovementLimit::new(None, Some(2)));
        assert_eq!(limits[2], MovementLimit::new(None, Some(0)));
        assert_eq!(limits[3], MovementLimit::new(Some(0), None));
    }

    #[test]
    fn test_limit_at_matches_full_computation() {
        let index = rules(&[('a', 'c'), ('c', 'e'), ('b', 'e')]);
        let seq = ['e', 'a', 'b', 'c', 'd', 'e'];
        let all = compute_limits(&seq, &index, &Identity);
        for (i, expected) in all.iter().enumerate() {
            assert_eq!(limit_at(&seq, &index, &Identity, i), Some(*expected));
        }
        assert_eq!(limit_at(&seq, &index, &Identity, seq.len()), None);
    }

    #[test]
    fn test_first_violation() {
        let index = rules(&[('a', 'b'), ('c', 'd')]);
        assert_eq!(first_violation(&['a', 'b', 'c', 'd'], &index, &Identity), None);
        assert_eq!(
            first_violation(&['a', 'd', 'b', 'c'], &index, &Identity),
            Some(Violation {
                predecessor: 3,
                successor: 1,
            })
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let index = rules(&[('a', 'c'), ('c', 'e'), ('b', 'e'), ('d', 'a')]);
        let seq: Vec<char> = "abcdeabcdeedcba".chars().collect();
        assert_eq!(
            compute_limits_par(&seq, &index, &Identity),
            compute_limits(&seq, &index, &Identity)
        );
    }
}

//! Rule index storage.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{set, IndexMap, IndexSet};

/// Precedence rules over canonical keys.
///
/// Invariant: `s` is in `successors_of(p)` if and only if `p` is in
/// `predecessors_of(s)`. Every mutation keeps both maps in step and prunes
/// sets that become empty.
///
/// Bounds iterate in the order their rules were added, so enforcement that
/// walks them is reproducible across runs.
///
/// # Examples
///
/// ```
/// use u_precedence::rules::RuleIndex;
///
/// let mut rules = RuleIndex::new();
/// rules.add_rule("a", "b");
/// rules.add_rule("a", "c");
///
/// assert!(rules.successors_of(&"a").contains(&"b"));
/// assert!(rules.predecessors_of(&"c").contains(&"a"));
/// assert_eq!(rules.rule_count(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: serde::Serialize + Eq + Hash",
        deserialize = "K: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct RuleIndex<K> {
    /// key -> keys that must come after it.
    must_follow: IndexMap<K, IndexSet<K>>,
    /// key -> keys that must come before it.
    must_precede: IndexMap<K, IndexSet<K>>,
}

impl<K> Default for RuleIndex<K> {
    fn default() -> Self {
        Self {
            must_follow: IndexMap::new(),
            must_precede: IndexMap::new(),
        }
    }
}

impl<K: Eq + Hash> PartialEq for RuleIndex<K> {
    fn eq(&self, other: &Self) -> bool {
        self.must_follow == other.must_follow && self.must_precede == other.must_precede
    }
}

impl<K: Eq + Hash> Eq for RuleIndex<K> {}

impl<K> RuleIndex<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records "`predecessor` before `successor`".
    ///
    /// Returns `false` if the rule was already present.
    pub fn add_rule(&mut self, predecessor: K, successor: K) -> bool {
        let added = self
            .must_follow
            .entry(predecessor.clone())
            .or_default()
            .insert(successor.clone());
        self.must_precede
            .entry(successor)
            .or_default()
            .insert(predecessor);
        added
    }

    /// Removes "`predecessor` before `successor`" if present.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn remove_rule(&mut self, predecessor: &K, successor: &K) -> bool {
        let removed = unlink(&mut self.must_follow, predecessor, successor);
        unlink(&mut self.must_precede, successor, predecessor);
        removed
    }

    /// Removes every rule in which `key` appears on either side.
    ///
    /// Returns the number of rules removed.
    pub fn remove_rules_for(&mut self, key: &K) -> usize {
        let mut removed = 0;

        if let Some(successors) = self.must_follow.shift_remove(key) {
            for successor in &successors {
                unlink(&mut self.must_precede, successor, key);
            }
            removed += successors.len();
        }

        if let Some(predecessors) = self.must_precede.shift_remove(key) {
            for predecessor in &predecessors {
                unlink(&mut self.must_follow, predecessor, key);
            }
            removed += predecessors.len();
        }

        removed
    }

    /// Keys that must appear before `key`.
    pub fn predecessors_of(&self, key: &K) -> Bounds<'_, K> {
        Bounds {
            set: self.must_precede.get(key),
        }
    }

    /// Keys that must appear after `key`.
    pub fn successors_of(&self, key: &K) -> Bounds<'_, K> {
        Bounds {
            set: self.must_follow.get(key),
        }
    }

    /// Whether "`predecessor` before `successor`" is stored.
    pub fn contains_rule(&self, predecessor: &K, successor: &K) -> bool {
        self.successors_of(predecessor).contains(successor)
    }

    /// Number of stored rules.
    pub fn rule_count(&self) -> usize {
        self.must_follow.values().map(IndexSet::len).sum()
    }

    /// Whether no rule is stored.
    pub fn is_empty(&self) -> bool {
        self.must_follow.is_empty()
    }

    /// Iterates over all rules as `(predecessor, successor)` pairs.
    ///
    /// Pairs come grouped by predecessor, in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.must_follow
            .iter()
            .flat_map(|(p, successors)| successors.iter().map(move |s| (p, s)))
    }
}

/// Removes `value` from `map[key]`, dropping the set once it is empty.
fn unlink<K: Eq + Hash>(map: &mut IndexMap<K, IndexSet<K>>, key: &K, value: &K) -> bool {
    let Some(set) = map.get_mut(key) else {
        return false;
    };
    let removed = set.shift_remove(value);
    if set.is_empty() {
        map.shift_remove(key);
    }
    removed
}

/// Read-only view of the keys bounding one key on one side.
///
/// Empty when the key has no rules on that side.
#[derive(Debug)]
pub struct Bounds<'a, K> {
    set: Option<&'a IndexSet<K>>,
}

impl<K> Clone for Bounds<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Bounds<'_, K> {}

impl<'a, K: Eq + Hash> Bounds<'a, K> {
    /// Whether `key` is one of the bounds.
    pub fn contains(&self, key: &K) -> bool {
        self.set.is_some_and(|s| s.contains(key))
    }

    /// Number of bounding keys.
    pub fn len(&self) -> usize {
        self.set.map_or(0, IndexSet::len)
    }

    /// Whether there are no bounding keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the bounding keys in the order their rules were added.
    pub fn iter(&self) -> impl Iterator<Item = &'a K> {
        self.set.into_iter().flat_map(IndexSet::iter)
    }
}

impl<'a, K> IntoIterator for Bounds<'a, K> {
    type Item = &'a K;
    type IntoIter = std::iter::Flatten<std::option::IntoIter<set::Iter<'a, K>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.map(IndexSet::iter).into_iter().flatten()
    }
}

//! The suspended list facade.

use std::fmt;

use tracing::debug;

use super::config::ListConfig;
use crate::error::{OrderError, OrderResult};
use crate::key::{Identity, KeyEncoder};
use crate::limits::{compute_limits, first_violation, MovementLimit};
use crate::rearrange::{Enforcement, Rearranger};
use crate::rules::RuleIndex;

/// An ordered sequence that keeps itself consistent with precedence rules.
///
/// Rules are stored per canonical key (see [`KeyEncoder`]) and outlive the
/// items they mention: a rule whose items are absent stays latent and is
/// applied again as soon as a matching item is inserted.
///
/// # Examples
///
/// ```
/// use u_precedence::list::SuspendedList;
///
/// let mut list = SuspendedList::new();
/// for c in ['a', 'b', 'c', 'd', 'e'] {
///     list.push_right(c).unwrap();
/// }
///
/// list.add_rule_before(&'b', &'c').unwrap();
/// list.add_rule_before(&'c', &'d').unwrap();
/// list.add_rule_before(&'e', &'b').unwrap();
///
/// assert_eq!(list.to_vec(), vec!['a', 'e', 'b', 'c', 'd']);
/// ```
pub struct SuspendedList<T, E = Identity>
where
    E: KeyEncoder<T>,
{
    items: Vec<T>,
    rules: RuleIndex<E::Key>,
    encoder: E,
    config: ListConfig,
}

impl<T> SuspendedList<T, Identity>
where
    Identity: KeyEncoder<T>,
{
    /// Creates an empty list keyed by the items themselves.
    pub fn new() -> Self {
        Self::with_encoder(Identity)
    }
}

impl<T> Default for SuspendedList<T, Identity>
where
    Identity: KeyEncoder<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> SuspendedList<T, E>
where
    E: KeyEncoder<T>,
{
    /// Creates an empty list that keys items with `encoder`.
    pub fn with_encoder(encoder: E) -> Self {
        Self {
            items: Vec::new(),
            rules: RuleIndex::new(),
            encoder,
            config: ListConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Returns the key encoder.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Returns the stored rules.
    pub fn rules(&self) -> &RuleIndex<E::Key> {
        &self.rules
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, or `None` when out of bounds.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The items in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Whether an item with the same key as `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Position of the first item sharing `item`'s key.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        let key = self.encoder.encode(item);
        self.items.iter().position(|i| self.encoder.encode(i) == key)
    }

    /// Position of the last item sharing `item`'s key.
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        let key = self.encoder.encode(item);
        self.items.iter().rposition(|i| self.encoder.encode(i) == key)
    }

    /// Current movement limit of every position.
    pub fn limits(&self) -> Vec<MovementLimit> {
        compute_limits(&self.items, &self.rules, &self.encoder)
    }

    /// Whether every stored rule holds for the current order.
    pub fn is_consistent(&self) -> bool {
        first_violation(&self.items, &self.rules, &self.encoder).is_none()
    }

    /// Removes "`x` before `y`". Never moves items.
    pub fn remove_rule_before(&mut self, x: &T, y: &T) -> bool {
        let predecessor = self.encoder.encode(x);
        let successor = self.encoder.encode(y);
        let removed = self.rules.remove_rule(&predecessor, &successor);
        if removed {
            debug!(?predecessor, ?successor, "rule removed");
        }
        removed
    }

    /// Removes "`x` after `y`", i.e. "`y` before `x`". Never moves items.
    pub fn remove_rule_after(&mut self, x: &T, y: &T) -> bool {
        self.remove_rule_before(y, x)
    }

    /// Removes every rule mentioning `item`'s key. Never moves items.
    ///
    /// Returns the number of rules removed.
    pub fn remove_rules_for_item(&mut self, item: &T) -> usize {
        let key = self.encoder.encode(item);
        let removed = self.rules.remove_rules_for(&key);
        debug!(?key, removed, "rules removed for item");
        removed
    }

    /// Removes and returns the item at `index`. Never moves other items.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes the first item sharing `item`'s key. Rules stay recorded.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        Some(self.items.remove(index))
    }

    /// Removes and returns the first item.
    pub fn pop_left(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Removes and returns the last item.
    pub fn pop_right(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Enforces every stored rule that mentions `key`.
    ///
    /// Rules where `key` is the predecessor run first, then those where it
    /// is the successor.
    fn apply_rules_for(
        items: &mut Vec<T>,
        rules: &RuleIndex<E::Key>,
        encoder: &E,
        key: &E::Key,
    ) -> OrderResult<Enforcement> {
        let mut outcome = Enforcement::default();
        for successor in rules.successors_of(key) {
            outcome.absorb(Rearranger::enforce(items, rules, encoder, key, successor)?);
        }
        for predecessor in rules.predecessors_of(key) {
            outcome.absorb(Rearranger::enforce(items, rules, encoder, predecessor, key)?);
        }
        Ok(outcome)
    }
}

impl<T, E> SuspendedList<T, E>
where
    T: Clone,
    E: KeyEncoder<T>,
{
    /// Adds "`x` before `y`" and rearranges the list to satisfy it.
    ///
    /// The rule is enforced first and recorded only on success, so a rule
    /// that conflicts with the stored ones is never kept. If either item is
    /// absent the rule is recorded and applied once both are present.
    ///
    /// # Errors
    ///
    /// [`OrderError::ConflictingRules`] when the stored rules make the
    /// order impossible. The sequence is then handled according to the
    /// configured [`ConflictPolicy`](super::ConflictPolicy).
    pub fn add_rule_before(&mut self, x: &T, y: &T) -> OrderResult<Enforcement> {
        let predecessor = self.encoder.encode(x);
        let successor = self.encoder.encode(y);

        let outcome = self.transact(|items, rules, encoder| {
            Rearranger::enforce(items, rules, encoder, &predecessor, &successor)
        })?;

        if self.rules.add_rule(predecessor.clone(), successor.clone()) {
            debug!(?predecessor, ?successor, moves = outcome.moves, "rule added");
        }
        Ok(outcome)
    }

    /// Adds "`x` after `y`", i.e. "`y` before `x`".
    pub fn add_rule_after(&mut self, x: &T, y: &T) -> OrderResult<Enforcement> {
        self.add_rule_before(y, x)
    }

    /// Inserts `item` at `index`, then applies the rules concerning it.
    ///
    /// Rules where the item is the predecessor are enforced first, then
    /// those where it is the successor, so the item may end up after a
    /// required predecessor even when inserted ahead of it.
    ///
    /// # Errors
    ///
    /// [`OrderError::IndexOutOfBounds`] if `index > len()`, before anything
    /// changes; [`OrderError::ConflictingRules`] if the stored rules cannot
    /// accommodate the new item.
    pub fn insert_at(&mut self, item: T, index: usize) -> OrderResult<Enforcement> {
        let len = self.items.len();
        if index > len {
            return Err(OrderError::IndexOutOfBounds { index, len });
        }

        let key = self.encoder.encode(&item);
        let unconstrained = self.rules.successors_of(&key).is_empty()
            && self.rules.predecessors_of(&key).is_empty();
        if unconstrained {
            // Nothing can move, so no snapshot is needed.
            self.items.insert(index, item);
            return Ok(Enforcement::default());
        }

        self.transact(move |items, rules, encoder| {
            items.insert(index, item);
            Self::apply_rules_for(items, rules, encoder, &key)
        })
    }

    /// Inserts `item` at the front, then applies the rules concerning it.
    pub fn push_left(&mut self, item: T) -> OrderResult<Enforcement> {
        self.insert_at(item, 0)
    }

    /// Appends `item`, then applies the rules concerning it.
    pub fn push_right(&mut self, item: T) -> OrderResult<Enforcement> {
        let len = self.items.len();
        self.insert_at(item, len)
    }

    /// Copy of the items in order, independent of the list.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Independent copy of the list, its rules and its configuration.
    pub fn copy(&self) -> Self
    where
        E: Clone,
    {
        self.clone()
    }

    /// Runs a sequence mutation, restoring the previous order on failure
    /// when the policy asks for it.
    fn transact<F>(&mut self, op: F) -> OrderResult<Enforcement>
    where
        F: FnOnce(&mut Vec<T>, &RuleIndex<E::Key>, &E) -> OrderResult<Enforcement>,
    {
        let snapshot = self.config.rolls_back().then(|| self.items.clone());
        let result = op(&mut self.items, &self.rules, &self.encoder);
        if let (Err(err), Some(snapshot)) = (&result, snapshot) {
            debug!(error = %err, "rolling back sequence");
            self.items = snapshot;
        }
        result
    }
}

impl<T: Clone, E: KeyEncoder<T> + Clone> Clone for SuspendedList<T, E> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            rules: self.rules.clone(),
            encoder: self.encoder.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T: fmt::Debug, E: KeyEncoder<T>> fmt::Debug for SuspendedList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuspendedList")
            .field("items", &self.items)
            .field("rules", &self.rules)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, T, E: KeyEncoder<T>> IntoIterator for &'a SuspendedList<T, E> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

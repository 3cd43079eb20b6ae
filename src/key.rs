//! Canonical keys for items.
//!
//! Rules never compare items directly. Every lookup goes through a
//! [`KeyEncoder`], so structurally distinct values that represent the same
//! logical item share the same rules.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

/// Maps an item to the key used for all rule bookkeeping.
///
/// Implementations must be pure: the same item must always produce the
/// same key, otherwise the rule index loses its symmetry.
///
/// # Examples
///
/// ```
/// use u_precedence::key::{key_fn, Identity, KeyEncoder};
///
/// assert_eq!(Identity.encode(&"a"), "a");
///
/// let by_len = key_fn(|s: &String| s.len());
/// assert_eq!(by_len.encode(&"abc".to_string()), 3);
/// ```
pub trait KeyEncoder<T> {
    /// The canonical key type.
    type Key: Clone + Eq + Hash + Debug;

    /// Produces the canonical key of `item`.
    fn encode(&self, item: &T) -> Self::Key;
}

/// Uses the item itself as its key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> KeyEncoder<T> for Identity
where
    T: Clone + Eq + Hash + Debug,
{
    type Key = T;

    fn encode(&self, item: &T) -> T {
        item.clone()
    }
}

/// Adapts a closure into a [`KeyEncoder`]. Built by [`key_fn`].
pub struct KeyFn<F, K> {
    f: F,
    _key: PhantomData<fn() -> K>,
}

/// Wraps `f` as a key encoder.
pub fn key_fn<T, K, F>(f: F) -> KeyFn<F, K>
where
    F: Fn(&T) -> K,
{
    KeyFn {
        f,
        _key: PhantomData,
    }
}

impl<T, K, F> KeyEncoder<T> for KeyFn<F, K>
where
    F: Fn(&T) -> K,
    K: Clone + Eq + Hash + Debug,
{
    type Key = K;

    fn encode(&self, item: &T) -> K {
        (self.f)(item)
    }
}

impl<F: Clone, K> Clone for KeyFn<F, K> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _key: PhantomData,
        }
    }
}

impl<F, K> Debug for KeyFn<F, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyFn").finish_non_exhaustive()
    }
}

//! Suspended list configuration.

/// What happens to the sequence when a call fails with a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictPolicy {
    /// Restore the sequence to its state before the failed call.
    #[default]
    Rollback,

    /// Keep whatever moves the cascade made before the conflict was found.
    ///
    /// Cheaper, since no snapshot is taken, but the sequence may be left
    /// partially rearranged.
    KeepPartial,
}

/// Configuration for a [`SuspendedList`](super::SuspendedList).
///
/// # Examples
///
/// ```
/// use u_precedence::list::{ConflictPolicy, ListConfig};
///
/// let config = ListConfig::default()
///     .with_conflict_policy(ConflictPolicy::KeepPartial);
/// assert_eq!(config.conflict_policy, ConflictPolicy::KeepPartial);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    /// Behaviour of the sequence after a conflicting call.
    pub conflict_policy: ConflictPolicy,
}

impl ListConfig {
    /// Sets the conflict policy.
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Whether a snapshot must be taken before a mutating call.
    pub(crate) fn rolls_back(&self) -> bool {
        self.conflict_policy == ConflictPolicy::Rollback
    }
}

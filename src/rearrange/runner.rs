//! Rule enforcement engine.
//!
//! # Algorithm
//!
//! To enforce "`p` before `s`":
//!
//! 1. Locate the last `p` (`target`) and the first `s` (`start`). If either
//!    is missing the rule is latent and nothing moves.
//! 2. While `target > start`, resolve the pair and locate again.
//! 3. Resolving keeps a stack of positions that must end up right of
//!    `target`, seeded with `start`:
//!    a. If the top equals `target`, two items need the same slot: conflict.
//!    b. If the top item's right limit covers the distance to `target`, move
//!       it just past `target`, pop it, and shift `target` left by one.
//!    c. Otherwise push the position of the successor blocking it, so that
//!       blocker is relocated first.
//!
//! Only items that stand in the way move, and each moves only as far as its
//! own rules allow. Limits are recomputed after every move since positions
//! shift.

use tracing::{debug, trace};

use crate::error::{OrderError, OrderResult};
use crate::key::KeyEncoder;
use crate::limits::{limit_at, MovementLimit};
use crate::rules::RuleIndex;

/// Summary of one or more rule enforcements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Enforcement {
    /// Items physically moved.
    pub moves: usize,
    /// Resolve passes run (one per violating pair found).
    pub passes: usize,
}

impl Enforcement {
    /// Whether the sequence was left untouched.
    pub fn is_noop(&self) -> bool {
        self.moves == 0
    }

    pub(crate) fn absorb(&mut self, other: Enforcement) {
        self.moves += other.moves;
        self.passes += other.passes;
    }
}

/// Enforces precedence rules on a sequence.
///
/// The rearranger is stateless; the sequence, the stored rules, and the key
/// encoder are passed in on every call. It never rolls back: when an
/// enforcement fails with [`OrderError::ConflictingRules`], moves already
/// made stay applied.
pub struct Rearranger;

impl Rearranger {
    /// Rearranges `sequence` so every `predecessor` precedes every
    /// `successor`.
    ///
    /// The rule itself does not need to be stored in `rules`; only the
    /// stored rules limit how blocking items may move.
    ///
    /// # Errors
    ///
    /// [`OrderError::ConflictingRules`] if the stored rules make the
    /// requested order impossible.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_precedence::key::Identity;
    /// use u_precedence::rearrange::Rearranger;
    /// use u_precedence::rules::RuleIndex;
    ///
    /// let mut seq = vec!['a', 'b', 'c', 'd'];
    /// let rules = RuleIndex::new();
    ///
    /// let outcome = Rearranger::enforce(&mut seq, &rules, &Identity, &'d', &'a').unwrap();
    /// assert_eq!(seq, vec!['b', 'c', 'd', 'a']);
    /// assert_eq!(outcome.moves, 1);
    /// ```
    pub fn enforce<T, E>(
        sequence: &mut Vec<T>,
        rules: &RuleIndex<E::Key>,
        encoder: &E,
        predecessor: &E::Key,
        successor: &E::Key,
    ) -> OrderResult<Enforcement>
    where
        E: KeyEncoder<T>,
    {
        if predecessor == successor {
            return Self::enforce_self_rule(sequence, encoder, predecessor);
        }

        let mut outcome = Enforcement::default();
        loop {
            let last_pred = sequence
                .iter()
                .rposition(|item| encoder.encode(item) == *predecessor);
            let first_succ = sequence
                .iter()
                .position(|item| encoder.encode(item) == *successor);

            let (Some(target), Some(start)) = (last_pred, first_succ) else {
                return Ok(outcome);
            };
            if target <= start {
                if !outcome.is_noop() {
                    debug!(
                        ?predecessor,
                        ?successor,
                        moves = outcome.moves,
                        passes = outcome.passes,
                        "rule enforced"
                    );
                }
                return Ok(outcome);
            }

            outcome.moves += Self::resolve(sequence, rules, encoder, start, target)?;
            outcome.passes += 1;
        }
    }

    /// "`k` before `k`" can only hold while at most one `k` is present.
    fn enforce_self_rule<T, E>(
        sequence: &[T],
        encoder: &E,
        key: &E::Key,
    ) -> OrderResult<Enforcement>
    where
        E: KeyEncoder<T>,
    {
        let occurrences = sequence
            .iter()
            .filter(|item| encoder.encode(item) == *key)
            .count();
        if occurrences > 1 {
            let name = format!("{key:?}");
            return Err(OrderError::ConflictingRules {
                moving: name.clone(),
                blocking: name,
            });
        }
        Ok(Enforcement::default())
    }

    /// Moves the item at `start`, and whatever blocks it, to the right of
    /// the item at `target`.
    ///
    /// Returns the number of items moved.
    pub(crate) fn resolve<T, E>(
        sequence: &mut Vec<T>,
        rules: &RuleIndex<E::Key>,
        encoder: &E,
        start: usize,
        mut target: usize,
    ) -> OrderResult<usize>
    where
        E: KeyEncoder<T>,
    {
        let mut stack = vec![start];
        let mut moves = 0;

        while let Some(&current) = stack.last() {
            if current >= target {
                let deferred = stack
                    .len()
                    .checked_sub(2)
                    .map_or(current, |below| stack[below]);
                let moving = format!("{:?}", encoder.encode(&sequence[deferred]));
                let blocking = format!("{:?}", encoder.encode(&sequence[current]));
                debug!(%moving, %blocking, depth = stack.len(), "conflicting rules");
                return Err(OrderError::ConflictingRules { moving, blocking });
            }

            let gap = target - current;
            match limit_at(sequence, rules, encoder, current) {
                Some(MovementLimit {
                    right: Some(right), ..
                }) if right < gap => {
                    let blocker = current + right + 1;
                    trace!(current, blocker, target, "deferring behind blocker");
                    stack.push(blocker);
                }
                _ => {
                    let item = sequence.remove(current);
                    sequence.insert(target, item);
                    trace!(from = current, to = target, "moved item");
                    stack.pop();
                    target -= 1;
                    moves += 1;
                }
            }
        }

        Ok(moves)
    }
}

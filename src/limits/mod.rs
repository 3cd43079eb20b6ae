//! Movement limits.
//!
//! For every position of a sequence, how many steps the item there may move
//! left or right before it would cross the nearest key that a rule requires
//! on that side. Limits are a derived view: they are recomputed from the
//! current sequence and rule index on every call and never cached, because
//! every move shifts positions.
//!
//! # Example
//!
//! For `[a, b, c]` with rules `a < b` and `a < c`:
//!
//! | item | left | right |
//! |------|------|-------|
//! | a    | ∞    | 0     |
//! | b    | 0    | ∞     |
//! | c    | 1    | ∞     |
//!
//! `c` may step once to the left (`[a, c, b]`) but not twice, which would
//! put it ahead of `a`.

mod calculator;
mod types;

#[cfg(feature = "parallel")]
pub use calculator::compute_limits_par;
pub use calculator::{compute_limits, first_violation, limit_at};
pub use types::{MovementLimit, Violation};

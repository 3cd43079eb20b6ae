//! Bidirectional precedence rule index.
//!
//! A rule `(p, s)` reads "every `p` must come before every `s`". The index
//! stores each rule twice, once under the predecessor and once under the
//! successor, so both "what must follow `k`" and "what must precede `k`"
//! are single lookups.
//!
//! # Key Components
//!
//! - [`RuleIndex`]: the two adjacency maps and their mutations
//! - [`Bounds`]: read-only view of one key's neighbours

mod index;

pub use index::{Bounds, RuleIndex};

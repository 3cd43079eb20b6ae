//! Suspended list: an ordered sequence kept consistent with precedence
//! rules.
//!
//! Every insertion re-applies the rules that concern the inserted item and
//! every rule addition rearranges the sequence right away. Removals never
//! move anything, since removing an item or a rule cannot create a
//! violation.
//!
//! # Key Components
//!
//! - [`SuspendedList`]: the sequence, its rules, and the key encoder
//! - [`ListConfig`] / [`ConflictPolicy`]: what a failed call leaves behind

mod config;
mod suspended;

pub use config::{ConflictPolicy, ListConfig};
pub use suspended::SuspendedList;

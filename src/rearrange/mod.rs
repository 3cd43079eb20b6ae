//! Cascading rearrangement.
//!
//! Given a rule "`p` before `s`" that must hold, moves the smallest set of
//! items needed to put every `p` ahead of every `s`. An item that is in the
//! way is only moved if its own rules allow it; otherwise the item blocking
//! *it* is relocated first, and so on. When two items would need the same
//! slot, the rule set is unsatisfiable and a conflict is reported.
//!
//! # Key Components
//!
//! - [`Rearranger`]: enforcement of one rule over a sequence
//! - [`Enforcement`]: what an enforcement did

mod runner;

pub use runner::{Enforcement, Rearranger};

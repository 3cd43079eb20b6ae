//! Precedence-constrained ordered lists.
//!
//! Keeps a sequence of items consistent with a changing set of pairwise
//! rules ("`x` must appear before `y`"). Instead of re-sorting, each rule is
//! enforced by moving only the items that stand in the way, cascading
//! through items whose own rules block them, and reporting a conflict when
//! the rules cannot all hold.
//!
//! - **Keys**: [`key::KeyEncoder`] maps items to the canonical keys that
//!   rules are written against; [`key::Identity`] uses the item itself.
//! - **Rules**: [`rules::RuleIndex`] stores every rule from both ends.
//! - **Limits**: [`limits::compute_limits`] tells how far each item can move
//!   before crossing a required neighbour.
//! - **Rearrangement**: [`rearrange::Rearranger`] enforces one rule with the
//!   fewest moves, or fails with [`OrderError::ConflictingRules`].
//! - **List**: [`list::SuspendedList`] ties it together; insertions and rule
//!   additions rearrange immediately.
//!
//! # Example
//!
//! ```
//! use u_precedence::list::SuspendedList;
//!
//! let mut layers = SuspendedList::new();
//! for layer in ["background", "hud", "sprites"] {
//!     layers.push_right(layer).unwrap();
//! }
//! layers.add_rule_before(&"sprites", &"hud").unwrap();
//! assert_eq!(layers.to_vec(), vec!["background", "sprites", "hud"]);
//!
//! // Rules outlive items: re-inserting "hud" keeps it above "sprites".
//! layers.remove_item(&"hud");
//! layers.push_left("hud").unwrap();
//! assert_eq!(layers.to_vec(), vec!["background", "sprites", "hud"]);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for rule indexes, limits and config.
//! - `parallel`: [`limits::compute_limits_par`] via rayon.

pub mod error;
pub mod key;
pub mod limits;
pub mod list;
pub mod rearrange;
pub mod rules;

pub use error::{OrderError, OrderResult};

//! Limit and violation value types.

/// How far an item may travel in each direction.
///
/// `None` means unbounded: no rule-bound key lies on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementLimit {
    /// Free slots before the nearest required predecessor.
    pub left: Option<usize>,
    /// Free slots before the nearest required successor.
    pub right: Option<usize>,
}

impl MovementLimit {
    /// No bound on either side.
    pub const UNBOUNDED: Self = Self {
        left: None,
        right: None,
    };

    /// Creates a limit from its two sides.
    pub fn new(left: Option<usize>, right: Option<usize>) -> Self {
        Self { left, right }
    }

    /// Whether neither side is bounded.
    pub fn is_unbounded(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether moving `steps` to the left keeps all rules intact.
    pub fn allows_left(&self, steps: usize) -> bool {
        self.left.map_or(true, |l| l >= steps)
    }

    /// Whether moving `steps` to the right keeps all rules intact.
    pub fn allows_right(&self, steps: usize) -> bool {
        self.right.map_or(true, |r| r >= steps)
    }
}

/// A pair of positions breaking a stored rule.
///
/// The item at `successor` is required after the item at `predecessor`
/// but currently sits before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Position of the item that should come first.
    pub predecessor: usize,
    /// Position of the item that should come later.
    pub successor: usize,
}

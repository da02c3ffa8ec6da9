use serde::{Deserialize, Serialize};

/// Cached classification of a single pile size.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Entry {
    good_move: Option<usize>,
}

impl Entry {
    pub fn new(good_move: Option<usize>) -> Entry {
        Entry { good_move }
    }

    /// The smallest move that leaves the opponent in a losing position.
    pub fn good_move(&self) -> Option<usize> {
        self.good_move
    }

    /// A pile is losing when it offers no good move.
    pub fn is_losing(&self) -> bool {
        self.good_move.is_none()
    }
}

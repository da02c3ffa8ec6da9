use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of coins on the table in the classic game.
pub const N_COINS: usize = 13;
/// Largest number of coins a player may take in the classic game.
pub const MAX_MOVE: usize = 3;

/// The two constants that fix a game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    pub initial_pile: usize,
    pub max_move: usize,
}

impl Rules {
    /// Validates the constants. A game needs at least two coins so that
    /// somebody gets to move, and every move takes at least one coin.
    pub fn new(initial_pile: usize, max_move: usize) -> Result<Rules> {
        if initial_pile < 2 || max_move == 0 {
            return Err(Error::InvalidRules {
                initial_pile,
                max_move,
            });
        }
        Ok(Rules {
            initial_pile,
            max_move,
        })
    }

    /// Largest number of coins that may be taken from `pile`.
    pub fn move_limit(&self, pile: usize) -> usize {
        self.max_move.min(pile)
    }

    /// Returns true if it is legal to take `taken` coins from a pile of `pile`.
    pub fn is_legal_move(&self, taken: usize, pile: usize) -> bool {
        taken > 0 && taken <= self.max_move && taken <= pile
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            initial_pile: N_COINS,
            max_move: MAX_MOVE,
        }
    }
}

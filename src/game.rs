use std::fmt;

use crate::error::{Error, Result};
use crate::rules::Rules;
use crate::Evaluator;

/// Distinguishes the human player's turns from the computer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Something that decides how many coins to take on its turn.
pub trait Player {
    fn take(&mut self, game: &Game) -> Result<usize>;
}

/// The automated opponent.
#[derive(Debug, Clone)]
pub struct Computer {
    evaluator: Evaluator,
}

impl Computer {
    pub fn new(evaluator: Evaluator) -> Computer {
        Computer { evaluator }
    }
}

impl Player for Computer {
    fn take(&mut self, game: &Game) -> Result<usize> {
        self.evaluator.choose_move(game.pile())
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub loser: Side,
    /// True if the loser emptied the pile, false if they were left with the
    /// single remaining coin.
    pub took_last: bool,
}

impl Outcome {
    pub fn winner(&self) -> Side {
        self.loser.other()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.took_last, self.loser) {
            (true, Side::Human) => write!(f, "You took the last coin. You lose."),
            (true, Side::Computer) => write!(f, "I took the last coin. I lose."),
            (false, Side::Human) => write!(f, "There is only one coin left.\nI win."),
            (false, Side::Computer) => write!(f, "There is only one coin left.\nI lose."),
        }
    }
}

/// Pile and turn state of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    rules: Rules,
    pile: usize,
    to_move: Side,
}

impl Game {
    pub fn new(rules: Rules, first: Side) -> Game {
        Game {
            rules,
            pile: rules.initial_pile,
            to_move: first,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn pile(&self) -> usize {
        self.pile
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The game ends once a single coin, or none, is left.
    pub fn is_over(&self) -> bool {
        self.pile <= 1
    }

    /// Removes `taken` coins for the side to move and passes the turn.
    pub fn take(&mut self, taken: usize) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if !self.rules.is_legal_move(taken, self.pile) {
            return Err(Error::IllegalMove {
                taken,
                pile: self.pile,
                limit: self.rules.move_limit(self.pile),
            });
        }
        self.pile -= taken;
        self.to_move = self.to_move.other();
        Ok(())
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.pile {
            0 => Some(Outcome {
                loser: self.to_move.other(),
                took_last: true,
            }),
            1 => Some(Outcome {
                loser: self.to_move,
                took_last: false,
            }),
            _ => None,
        }
    }

    /// Alternates turns between the two players until the game is decided.
    pub fn play(&mut self, human: &mut dyn Player, computer: &mut dyn Player) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.outcome() {
                log::info!("game over, {:?} wins", outcome.winner());
                return Ok(outcome);
            }
            let side = self.to_move;
            let taken = match side {
                Side::Human => human.take(self)?,
                Side::Computer => computer.take(self)?,
            };
            log::info!("{:?} takes {} of {}", side, taken, self.pile);
            self.take(taken)?;
        }
    }
}

/// Explains the rules of the game.
pub fn instructions(rules: &Rules) -> String {
    format!(
        "Hello. Welcome to the game of nim.\n\
         In this game, we will start with a pile of\n\
         {} coins on the table.\n\
         On each turn, you\n\
         and I will alternately take between 1 and\n\
         {} coins from the table.\n\
         The player who\n\
         takes the last coin loses.\n",
        rules.initial_pile, rules.max_move
    )
}

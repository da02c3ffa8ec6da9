use std::fmt;

/// Errors raised by the engine, the rules and the turn loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A position was requested for an empty pile.
    EmptyPile,
    /// The game constants cannot describe a playable game.
    InvalidRules { initial_pile: usize, max_move: usize },
    /// A player tried to take a number of coins the rules forbid.
    IllegalMove {
        taken: usize,
        pile: usize,
        limit: usize,
    },
    /// A move was attempted after the game ended.
    GameOver,
    /// Interactive input could not be read.
    Prompt(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyPile => write!(f, "there is no position to move from in an empty pile"),
            Error::InvalidRules {
                initial_pile,
                max_move,
            } => write!(
                f,
                "invalid rules: need at least 2 coins and a maximum move of at least 1 \
                 (got {initial_pile} coins, maximum move {max_move})"
            ),
            Error::IllegalMove { taken, pile, limit } => write!(
                f,
                "cannot take {taken} from a pile of {pile}, choose a number between 1 and {limit}"
            ),
            Error::GameOver => write!(f, "the game is already over"),
            Error::Prompt(message) => write!(f, "could not read move: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Game errors
//!
//! Every variant is recoverable by the caller. A rejected guess never changes
//! the session it was submitted to.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Session created with an unusable attempt limit
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("guess must be exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("guess must contain only letters A-Z")]
    NonAlphabetic,

    #[error("'{0}' has already been guessed")]
    DuplicateGuess(String),

    #[error("'{0}' is not in the word list")]
    DictionaryRejected(String),

    /// The game already ended in a win or ran out of attempts
    #[error("the game is over")]
    SessionOver,
}

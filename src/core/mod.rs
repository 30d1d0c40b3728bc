//! Core domain types for the game
//!
//! Words, verdicts and the scoring function. Everything here is pure: no I/O,
//! no shared state.

mod scorer;
mod verdict;
mod word;

pub use scorer::{letter_hints, score};
pub use verdict::{Verdict, Verdicts};
pub use word::{Word, WordError};

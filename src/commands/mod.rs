//! Command implementations

pub mod play;
pub mod score;

pub use play::{run_simple, start_session, submit};
pub use score::{ScoreResult, score_words};

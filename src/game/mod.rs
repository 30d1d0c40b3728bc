//! Game sessions
//!
//! `Session` is the single-game state machine; `SharedSession` guards one
//! session for callers on several threads.

mod session;
mod shared;

pub use session::{Attempt, GameState, Session};
pub use shared::SharedSession;

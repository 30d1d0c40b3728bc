//! Wordle Game
//!
//! A terminal word-guessing game with exact duplicate-letter scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameState, Session};
//!
//! let target = Word::new("crane").unwrap();
//! let mut session = Session::new(target, 6).unwrap();
//!
//! let attempt = session.submit_guess("trace", true).unwrap();
//! println!("{}", attempt.verdicts());
//!
//! session.submit_guess("crane", true).unwrap();
//! assert_eq!(session.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Target selection
pub mod select;

// Configuration file
pub mod config;

// Diagnostic logging
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::GameError;

//! Terminal output formatting
//!
//! Glyph rendering of verdicts, share summaries and colored tiles. Nothing in
//! here affects scoring.

pub mod display;
pub mod formatters;

pub use display::{Statistics, print_board, print_game_over};
pub use formatters::{
    SymbolSet, render_attempt_line, render_verdicts, share_summary, welcome_message,
};

//! Full-screen terminal interface
//!
//! `app` holds state and key handling; `rendering` draws it.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};

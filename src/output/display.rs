//! Colored terminal output for the line-based game

use super::formatters::{SymbolSet, render_attempt_line, share_summary};
use crate::core::Verdict;
use crate::game::{Attempt, GameState, Session};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Keyboard rows shown under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Games played during this process, never written to disk
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins on attempt `n`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    pub fn record(&mut self, session: &Session) {
        match session.state() {
            GameState::InProgress => return,
            GameState::Won => {
                self.games_won += 1;
                let n = session.attempt_count();
                if self.guess_distribution.len() <= n {
                    self.guess_distribution.resize(n + 1, 0);
                }
                self.guess_distribution[n] += 1;
            }
            GameState::Lost => {}
        }
        self.total_games += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// A letter as a colored tile
#[must_use]
pub fn tile(letter: u8, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    let text = text.as_str();
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// One attempt as a row of tiles followed by its glyph line
#[must_use]
pub fn attempt_row(attempt: &Attempt, symbols: &SymbolSet) -> String {
    let tiles: String = attempt
        .word()
        .letters()
        .iter()
        .zip(attempt.verdicts().iter())
        .map(|(&letter, verdict)| tile(letter, Some(verdict)).to_string())
        .collect();
    format!(
        "  {} {tiles}  {}",
        attempt.sequence().to_string().bright_black(),
        render_attempt_line(attempt, symbols)
    )
}

/// Print the board so far followed by the keyboard
pub fn print_board(session: &Session, symbols: &SymbolSet) {
    println!();
    for attempt in session.attempts() {
        println!("{}", attempt_row(attempt, symbols));
    }
    println!();
    print_keyboard(&session.letter_hints());
}

/// Print the keyboard with every known letter colored
pub fn print_keyboard(hints: &FxHashMap<u8, Verdict>) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .bytes()
            .map(|letter| tile(letter, hints.get(&letter).copied()).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
}

/// Print the end-of-game banner, share summary and statistics
pub fn print_game_over(session: &Session, symbols: &SymbolSet, stats: &Statistics) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match session.state() {
        GameState::Won => {
            let n = session.attempt_count();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {n} {}!",
                    if n == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameState::Lost => {
            println!(
                "{} {}",
                "❌ Out of attempts. The word was".red().bold(),
                session.target().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameState::InProgress => {}
    }
    println!("{}", "═".repeat(50).bright_cyan());

    println!("\n{}\n", share_summary(session, symbols, false));

    println!(
        "Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = "█".repeat(count);
        println!("  {guesses}: {} {count}", bar.green());
    }
}

//! Line-based interactive game
//!
//! Text prompt game loop without the full-screen TUI.

use crate::config::GameConfig;
use crate::core::Word;
use crate::error::GameError;
use crate::game::{Attempt, Session};
use crate::output::{Statistics, SymbolSet, print_board, print_game_over, welcome_message};
use crate::select::TargetSelector;
use crate::wordlists::WordBank;
use anyhow::{Context, Result, anyhow};
use chrono::Local;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Pick a target and start a session with the configured attempt limit
///
/// # Errors
///
/// Returns an error if the target list is empty or `max_attempts` is zero.
pub fn start_session(
    bank: &WordBank,
    config: &GameConfig,
    selector: &mut TargetSelector,
) -> Result<Session> {
    let target: Word = selector
        .select(bank.target_words())
        .cloned()
        .ok_or_else(|| anyhow!("target word list is empty"))?;

    if config.debug_mode {
        debug!(target = %target, "new game");
    }

    Session::new(target, config.max_attempts).context("failed to start game")
}

/// Check the guess against the dictionary, then submit it
///
/// # Errors
///
/// Returns the session's `GameError` for a rejected guess.
pub fn submit(session: &mut Session, bank: &WordBank, input: &str) -> Result<Attempt, GameError> {
    let is_known_valid = bank.is_allowed(input);
    session.submit_guess(input, is_known_valid)
}

enum Command {
    Quit,
    NewGame,
    Guess(String),
}

/// Commands start with ':' so that no word of any length is shadowed
fn parse_command(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => Command::Quit,
        ":new" | ":n" => Command::NewGame,
        other => Command::Guess(other.to_string()),
    }
}

/// Run the line-based game until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if a session cannot be started.
pub fn run_simple(bank: &WordBank, config: &GameConfig, mut selector: TargetSelector) -> Result<()> {
    let symbols = SymbolSet::from(&config.display_symbols);
    let mut stats = Statistics::default();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                 W O R D L E                      ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!(
        "{}",
        welcome_message(config.word_length, config.max_attempts, Local::now().date_naive())
    );
    println!("Commands: ':new' to give up and start over, ':quit' to exit\n");

    'games: loop {
        let mut session = start_session(bank, config, &mut selector)?;

        while !session.state().is_terminal() {
            let prompt = format!(
                "{} attempts left. Enter a word",
                session.remaining_attempts()
            );
            let Some(line) = read_line(&mut input, &prompt)? else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };

            match parse_command(&line) {
                Command::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Command::NewGame => {
                    println!(
                        "The word was {}.\n\n🔄 New game started!\n",
                        session.target().text().to_uppercase().bright_yellow()
                    );
                    continue 'games;
                }
                Command::Guess(guess) => match submit(&mut session, bank, &guess) {
                    Ok(_) => print_board(&session, &symbols),
                    Err(e) => println!("{} {e}\n", "❌".red()),
                },
            }
        }

        stats.record(&session);
        print_game_over(&session, &symbols, &stats);

        if selector.is_daily() {
            println!("\nCome back tomorrow for a new word!\n");
            return Ok(());
        }

        match read_line(&mut input, "\nPlay again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

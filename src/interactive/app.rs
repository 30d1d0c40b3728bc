//! TUI application state and logic

use crate::commands::{start_session, submit};
use crate::config::GameConfig;
use crate::game::{GameState, Session};
use crate::output::{Statistics, SymbolSet, share_summary, welcome_message};
use crate::select::TargetSelector;
use crate::wordlists::WordBank;
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub bank: &'a WordBank,
    pub config: &'a GameConfig,
    pub selector: TargetSelector,
    pub symbols: SymbolSet,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no session can be started.
    pub fn new(bank: &'a WordBank, config: &'a GameConfig, mut selector: TargetSelector) -> Result<Self> {
        let session = start_session(bank, config, &mut selector)?;

        let mut app = Self {
            bank,
            config,
            selector,
            symbols: SymbolSet::from(&config.display_symbols),
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            &welcome_message(
                config.word_length,
                config.max_attempts,
                Local::now().date_naive(),
            ),
            MessageStyle::Info,
        );
        if config.debug_mode {
            app.add_message(
                &format!("[debug] target: {}", app.session.target().text().to_uppercase()),
                MessageStyle::Info,
            );
        }
        Ok(app)
    }

    pub fn push_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.session.word_length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match submit(&mut self.session, self.bank, &guess) {
            Ok(_) => {
                self.input_buffer.clear();
                self.on_guess_accepted();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn on_guess_accepted(&mut self) {
        match self.session.state() {
            GameState::InProgress => {}
            GameState::Won => {
                self.stats.record(&self.session);
                self.input_mode = InputMode::GameOver;

                let celebration = match self.session.attempt_count() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_game_over_hint();
            }
            GameState::Lost => {
                self.stats.record(&self.session);
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!(
                        "Out of attempts. The word was {}.",
                        self.session.target().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_game_over_hint();
            }
        }
    }

    fn add_game_over_hint(&mut self) {
        if self.selector.is_daily() {
            self.add_message("Come back tomorrow! Press 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match start_session(self.bank, self.config, &mut self.selector) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
                if self.config.debug_mode {
                    let target = self.session.target().text().to_uppercase();
                    self.add_message(&format!("[debug] target: {target}"), MessageStyle::Info);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Shareable summary of the finished game
    #[must_use]
    pub fn share_text(&self) -> String {
        share_summary(&self.session, &self.symbols, false)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if !self.selector.is_daily() => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Returns the share summary of the last finished game, if any
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok((app.input_mode == InputMode::GameOver).then(|| app.share_text()))
}

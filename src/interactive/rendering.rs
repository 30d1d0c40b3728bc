//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use crate::output::display::KEYBOARD_ROWS;
use crate::output::render_verdicts;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Option<Verdict>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match verdict {
        Some(Verdict::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Verdict::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile_span(letter: char, verdict: Option<Verdict>) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), verdict_style(verdict))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let width = session.word_length();
    let mut lines: Vec<Line> = Vec::new();

    for attempt in session.attempts() {
        let mut spans = Vec::with_capacity(width * 2);
        for (&letter, verdict) in attempt.word().letters().iter().zip(attempt.verdicts().iter()) {
            spans.push(tile_span(char::from(letter), Some(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut remaining = session.remaining_attempts();

    // Row being typed
    if app.input_mode == InputMode::Guessing && remaining > 0 {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let mut spans = Vec::with_capacity(width * 2);
        for i in 0..width {
            let letter = typed.get(i).copied().unwrap_or('_');
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        remaining -= 1;
    }

    let placeholders = placeholder_rows(remaining, lines.len() / 2, area.height);
    for _ in 0..placeholders {
        let empty = " · ".repeat(width);
        lines.push(Line::styled(empty, Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board ({}/{}) ",
                session.attempt_count(),
                session.max_attempts()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// Empty rows still to draw: the attempts left, but no more than fit in a
/// board of `height` (two lines per row inside the border)
fn placeholder_rows(remaining: usize, drawn: usize, height: u16) -> usize {
    let capacity = usize::from(height.saturating_sub(2)) / 2;
    remaining.min(capacity.saturating_sub(drawn))
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Keyboard
            Constraint::Percentage(50), // Messages
            Constraint::Min(4),         // Share / info
        ])
        .split(area);

    render_keyboard(f, &app.session.letter_hints(), chunks[0]);
    render_messages(f, app, chunks[1]);
    render_result(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, hints: &FxHashMap<u8, Verdict>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| tile_span(char::from(letter), hints.get(&letter).copied()))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let content: Vec<Line> = if app.input_mode == InputMode::GameOver {
        app.share_text().lines().map(|l| Line::from(l.to_string())).collect()
    } else {
        app.session
            .attempts()
            .last()
            .map(|a| {
                vec![Line::from(format!(
                    "Last: {} {}",
                    a.word().text().to_uppercase(),
                    render_verdicts(a.verdicts(), &app.symbols)
                ))]
            })
            .unwrap_or_default()
    };

    let title = if app.input_mode == InputMode::GameOver {
        " Share "
    } else {
        " Info "
    };
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.selector.is_daily() => {
            (" Game over | 'q' to quit ", "", Color::Green)
        }
        InputMode::GameOver => (
            " Game over | 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Esc to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = if app.selector.is_daily() {
        "Mode: Daily"
    } else {
        "Mode: Random"
    };
    f.render_widget(Paragraph::new(mode_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let remaining_text = format!("Attempts left: {}", app.session.remaining_attempts());
    let remaining = Paragraph::new(remaining_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(remaining, chunks[2]);
}

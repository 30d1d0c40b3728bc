//! Text formatting for verdicts, attempts and shareable summaries

use crate::core::{Verdict, Verdicts};
use chrono::NaiveDate;
use crate::game::{Attempt, GameState, Session};

/// One glyph per verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    /// Indexed by `Verdict::ordinal`
    glyphs: [String; 3],
}

impl SymbolSet {
    #[must_use]
    pub fn new(absent: impl Into<String>, present: impl Into<String>, correct: impl Into<String>) -> Self {
        Self {
            glyphs: [absent.into(), present.into(), correct.into()],
        }
    }

    /// Plain ASCII glyphs for terminals without emoji
    #[must_use]
    pub fn ascii() -> Self {
        Self::new("-", "Y", "G")
    }

    #[must_use]
    pub fn glyph(&self, verdict: Verdict) -> &str {
        &self.glyphs[usize::from(verdict.ordinal())]
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::new("⬛", "🟨", "🟩")
    }
}

impl From<&[String; 3]> for SymbolSet {
    fn from(glyphs: &[String; 3]) -> Self {
        Self {
            glyphs: glyphs.clone(),
        }
    }
}

/// Format verdicts as a glyph string
#[must_use]
pub fn render_verdicts(verdicts: &Verdicts, symbols: &SymbolSet) -> String {
    verdicts.iter().map(|v| symbols.glyph(v)).collect()
}

/// One line per attempt: `CRANE ⬛🟩🟩🟨🟩 (3/5)`
///
/// The fraction counts Correct positions.
#[must_use]
pub fn render_attempt_line(attempt: &Attempt, symbols: &SymbolSet) -> String {
    let verdicts = attempt.verdicts();
    format!(
        "{} {} ({}/{})",
        attempt.word().text().to_uppercase(),
        render_verdicts(verdicts, symbols),
        verdicts.count(Verdict::Correct),
        verdicts.len()
    )
}

/// Greeting shown when a game front end starts
#[must_use]
pub fn welcome_message(word_length: usize, max_attempts: usize, today: NaiveDate) -> String {
    format!(
        "The date today is {}. Guess the {word_length}-letter word in {max_attempts} tries.",
        today.format("%A, %B %-d, %Y")
    )
}

/// Shareable result: header line, blank line, glyph grid
///
/// The header shows the target when `reveal` is set and a row of `*`
/// otherwise, followed by the winning attempt number or `X` for a loss.
///
/// ```text
/// Wordle CRANE 3/6
///
/// ⬛🟩🟩🟨🟩
/// ...
/// ```
#[must_use]
pub fn share_summary(session: &Session, symbols: &SymbolSet, reveal: bool) -> String {
    let word = if reveal {
        session.target().text().to_uppercase()
    } else {
        "*".repeat(session.word_length())
    };

    let score = match session.state() {
        GameState::Won => session.attempt_count().to_string(),
        GameState::Lost => "X".to_string(),
        GameState::InProgress => "-".to_string(),
    };

    let grid: Vec<String> = session
        .attempts()
        .iter()
        .map(|a| render_verdicts(a.verdicts(), symbols))
        .collect();

    format!(
        "Wordle {word} {score}/{}\n\n{}",
        session.max_attempts(),
        grid.join("\n")
    )
}

//! One-shot scoring command
//!
//! Scores a guess against a given target without starting a game.

use crate::core::{Verdicts, Word, score};
use anyhow::{Context, Result};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub verdicts: Verdicts,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let target = Word::new(target).with_context(|| format!("invalid target {target:?}"))?;
    let verdicts = score(&guess, &target)?;

    Ok(ScoreResult {
        guess,
        target,
        verdicts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_words_reports_verdicts() {
        let result = score_words("LLAMA", "allow").unwrap();
        assert_eq!(result.guess.text(), "llama");
        assert_eq!(result.target.text(), "allow");
        assert_eq!(result.verdicts.to_string(), "YGY--");
    }

    #[test]
    fn score_words_rejects_bad_input() {
        assert!(score_words("cr4ne", "crane").is_err());
        assert!(score_words("crane", "planet").is_err());
    }
}

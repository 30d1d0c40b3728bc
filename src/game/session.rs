//! Game session state machine
//!
//! A `Session` owns one target word and the ordered attempts made against it.
//! It moves from `InProgress` to `Won` or `Lost` and refuses further guesses
//! once terminal.

use crate::core::{Verdict, Verdicts, Word, WordError, letter_hints, score};
use crate::error::GameError;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// One accepted guess and its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    sequence: usize,
    word: Word,
    verdicts: Verdicts,
}

impl Attempt {
    /// Submission order, starting at 1
    #[must_use]
    pub const fn sequence(&self) -> usize {
        self.sequence
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn verdicts(&self) -> &Verdicts {
        &self.verdicts
    }

    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.verdicts.is_all_correct()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single game against a fixed target word
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    attempts: Vec<Attempt>,
    max_attempts: usize,
}

impl Session {
    /// Start a game
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::Session;
    ///
    /// let target = Word::new("crane").unwrap();
    /// let mut session = Session::new(target, 6).unwrap();
    ///
    /// let attempt = session.submit_guess("trace", true).unwrap();
    /// assert_eq!(attempt.sequence(), 1);
    /// assert_eq!(session.remaining_attempts(), 5);
    /// ```
    pub fn new(target: Word, max_attempts: usize) -> Result<Self, GameError> {
        if max_attempts < 1 {
            return Err(GameError::InvalidConfiguration(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        debug!(word_length = target.len(), max_attempts, "session created");

        Ok(Self {
            target,
            attempts: Vec::new(),
            max_attempts,
        })
    }

    /// Submit a guess
    ///
    /// `is_known_valid` is the caller's dictionary membership result; the
    /// session does not own any word list.
    ///
    /// Checks run in this order: terminal state, length, letters, repeats,
    /// dictionary. On any error the session is left untouched.
    ///
    /// # Errors
    /// - `SessionOver` if the game is already won or lost
    /// - `WrongLength` if the guess length differs from the target's
    /// - `NonAlphabetic` if the guess contains anything but letters
    /// - `DuplicateGuess` if the same word was guessed before
    /// - `DictionaryRejected` if `is_known_valid` is false
    pub fn submit_guess(&mut self, input: &str, is_known_valid: bool) -> Result<Attempt, GameError> {
        if self.state().is_terminal() {
            return Err(GameError::SessionOver);
        }

        let word = Word::with_length(input, self.target.len()).map_err(|e| match e {
            WordError::InvalidLength { expected, actual } => {
                GameError::WrongLength { expected, actual }
            }
            WordError::Empty => GameError::WrongLength {
                expected: self.target.len(),
                actual: 0,
            },
            WordError::NonAlphabetic => GameError::NonAlphabetic,
        })?;

        if self.has_guessed(&word) {
            return Err(GameError::DuplicateGuess(word.text().to_string()));
        }

        if !is_known_valid {
            return Err(GameError::DictionaryRejected(word.text().to_string()));
        }

        let verdicts = score(&word, &self.target)?;
        let attempt = Attempt {
            sequence: self.attempts.len() + 1,
            word,
            verdicts,
        };

        debug!(
            sequence = attempt.sequence,
            verdicts = %attempt.verdicts,
            "guess accepted"
        );

        self.attempts.push(attempt.clone());

        match self.state() {
            GameState::Won => info!(attempts = self.attempts.len(), "game won"),
            GameState::Lost => info!(attempts = self.attempts.len(), "game lost"),
            GameState::InProgress => {}
        }

        Ok(attempt)
    }

    /// True iff the most recent attempt is all Correct
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.attempts.last().is_some_and(Attempt::is_winning)
    }

    /// True iff every attempt was used without a win
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.attempts.len() == self.max_attempts && !self.is_won()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts - self.attempts.len()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_won() {
            GameState::Won
        } else if self.is_exhausted() {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.attempts.iter().any(|a| a.word == *word)
    }

    /// Best verdict known for each guessed letter, for keyboard displays
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, Verdict> {
        letter_hints(self.attempts.iter().map(|a| (&a.word, &a.verdicts)))
    }
}

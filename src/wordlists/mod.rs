//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, file loading for
//! custom lists, and the `WordBank` pairing accepted guesses with targets.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT};
pub use loader::{WordList, WordListError};

use crate::core::Word;
use std::path::Path;
use tracing::debug;

/// The accepted-guess list and the target-candidate list
///
/// Loaded once before any session starts and only read afterwards.
#[derive(Debug, Clone)]
pub struct WordBank {
    allowed: WordList,
    targets: WordList,
}

impl WordBank {
    /// Combine two lists; every target is also accepted as a guess
    #[must_use]
    pub fn new(allowed: WordList, targets: WordList) -> Self {
        let mut allowed = allowed;
        allowed.extend(targets.words().iter().cloned());
        Self { allowed, targets }
    }

    /// The lists compiled into the binary (5-letter words)
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Malformed` when `word_length` is not 5.
    pub fn embedded(word_length: usize) -> Result<Self, WordListError> {
        Self::load(None, None, word_length)
    }

    /// Load lists, using a file where a path is given and the embedded list
    /// otherwise
    ///
    /// # Errors
    ///
    /// Returns the first `WordListError` from either list.
    pub fn load(
        allowed_path: Option<&Path>,
        targets_path: Option<&Path>,
        word_length: usize,
    ) -> Result<Self, WordListError> {
        let allowed = match allowed_path {
            Some(path) => loader::load_from_file(path, word_length)?,
            None => WordList::from_slice(ALLOWED, word_length)?,
        };
        let targets = match targets_path {
            Some(path) => loader::load_from_file(path, word_length)?,
            None => WordList::from_slice(TARGETS, word_length)?,
        };

        let bank = Self::new(allowed, targets);
        debug!(
            allowed = bank.allowed.len(),
            targets = bank.targets.len(),
            "word lists loaded"
        );
        Ok(bank)
    }

    /// Case-insensitive check against the accepted-guess list
    #[must_use]
    pub fn is_allowed(&self, text: &str) -> bool {
        self.allowed.contains(text)
    }

    #[must_use]
    pub const fn allowed(&self) -> &WordList {
        &self.allowed
    }

    #[must_use]
    pub const fn targets(&self) -> &WordList {
        &self.targets
    }

    #[must_use]
    pub fn target_words(&self) -> &[Word] {
        self.targets.words()
    }
}

//! Word representation
//!
//! A `Word` is a non-empty run of ASCII letters, normalized to lowercase so
//! that every comparison downstream is case-insensitive.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A guess or target word
///
/// Stores the lowercase text alongside its bytes for positional comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must contain only letters A-Z")]
    NonAlphabetic,
}

impl Word {
    /// Create a new Word from a string of any non-zero length
    ///
    /// Surrounding whitespace is ignored and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        let text = trimmed.to_ascii_lowercase();
        let letters = text.as_bytes().to_vec();

        Ok(Self { text, letters })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// Length is checked before content, so `"ab1"` against a length of 5
    /// reports the length problem.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, otherwise
    /// whatever [`Word::new`] returns.
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        let actual = trimmed.chars().count();

        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        Self::new(trimmed)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a `Word` cannot be constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Count occurrences of each letter
    ///
    /// Used by the scorer as its per-call multiset.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

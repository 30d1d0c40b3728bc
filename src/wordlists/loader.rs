//! Word list loading
//!
//! Lists are line-delimited text: one word per line, blank lines and lines
//! starting with `#` ignored. Anything else that is not a word of the
//! expected length makes the whole list invalid.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {text:?} is not a {length}-letter word")]
    Malformed {
        line: usize,
        text: String,
        length: usize,
    },

    #[error("word list contains no words")]
    Empty,
}

/// An ordered, read-only list of words with case-insensitive lookup
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Parse line-delimited text
    ///
    /// Duplicate entries are kept once, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Malformed` for the first invalid line, or
    /// `WordListError::Empty` if no words remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::parse("# common\ncrane\nSLATE\n\n", 5).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("Crane"));
    /// ```
    pub fn parse(content: &str, word_length: usize) -> Result<Self, WordListError> {
        let mut list = Self {
            words: Vec::new(),
            index: FxHashSet::default(),
        };

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let word =
                Word::with_length(trimmed, word_length).map_err(|_| WordListError::Malformed {
                    line: i + 1,
                    text: trimmed.to_string(),
                    length: word_length,
                })?;
            list.push(word);
        }

        if list.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(list)
    }

    /// Build from a slice of already validated words (e.g. embedded lists)
    ///
    /// # Errors
    ///
    /// Same as [`WordList::parse`].
    pub fn from_slice(slice: &[&str], word_length: usize) -> Result<Self, WordListError> {
        Self::parse(&slice.join("\n"), word_length)
    }

    fn push(&mut self, word: Word) {
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Append words not already present
    pub(crate) fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        for word in words {
            self.push(word);
        }
    }

    /// Case-insensitive membership test
    ///
    /// Input that is not a valid word is never a member.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.index.contains(&word))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, otherwise whatever
/// [`WordList::parse`] returns.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    WordList::parse(&content, word_length)
}

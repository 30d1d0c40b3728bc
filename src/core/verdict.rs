//! Per-letter verdicts and verdict sequences
//!
//! A verdict is the feedback for one letter position:
//! - 0 = Absent (letter not matched)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Verdicts carry no display information; see `output` for glyphs.

use std::fmt;
use std::ops::Index;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Verdict {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Verdict {
    /// Ordinal value (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩 for Correct, 'Y'/'y'/🟨 for Present and
    /// '-'/'_'/'.'/⬜/⬛ for Absent.
    #[cfg(test)]
    pub(crate) const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Ordered verdicts for every position of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verdicts(Vec<Verdict>);

impl Verdicts {
    /// Wrap an already computed sequence
    #[must_use]
    pub const fn new(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is Correct (a winning guess)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Verdict] {
        &self.0
    }

    /// Parse a sequence like "GY-GY" or "🟩🟨⬜🟩🟨"
    #[cfg(test)]
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let verdicts = s
            .chars()
            .map(Verdict::from_char)
            .collect::<Option<Vec<_>>>()?;

        if verdicts.is_empty() {
            return None;
        }

        Some(Self(verdicts))
    }
}

impl Index<usize> for Verdicts {
    type Output = Verdict;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Verdicts {
    /// Plain ASCII form: G, Y and '-'
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            let ch = match verdict {
                Verdict::Correct => 'G',
                Verdict::Present => 'Y',
                Verdict::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_ordinals() {
        assert_eq!(Verdict::Absent.ordinal(), 0);
        assert_eq!(Verdict::Present.ordinal(), 1);
        assert_eq!(Verdict::Correct.ordinal(), 2);
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Absent);
    }

    #[test]
    fn verdicts_parse_valid() {
        let v1 = Verdicts::parse("GYG--").unwrap();
        let v2 = Verdicts::parse("🟩🟨🟩⬜⬛").unwrap();
        let v3 = Verdicts::parse("gyg_.").unwrap();

        assert_eq!(v1, v2);
        assert_eq!(v1, v3);
        assert_eq!(v1.count(Verdict::Correct), 2);
        assert_eq!(v1.count(Verdict::Present), 1);
        assert_eq!(v1.count(Verdict::Absent), 2);
    }

    #[test]
    fn verdicts_parse_invalid() {
        assert!(Verdicts::parse("GXGGY").is_none());
        assert!(Verdicts::parse("").is_none());
    }

    #[test]
    fn verdicts_all_correct() {
        assert!(Verdicts::parse("GGGGG").unwrap().is_all_correct());
        assert!(!Verdicts::parse("GGGGY").unwrap().is_all_correct());
        assert!(!Verdicts::new(Vec::new()).is_all_correct());
    }

    #[test]
    fn verdicts_display_round_trips_ascii() {
        let v = Verdicts::parse("-YG-G").unwrap();
        assert_eq!(v.to_string(), "-YG-G");
    }

    #[test]
    fn verdicts_index() {
        let v = Verdicts::parse("-YG").unwrap();
        assert_eq!(v[0], Verdict::Absent);
        assert_eq!(v[1], Verdict::Present);
        assert_eq!(v[2], Verdict::Correct);
        assert_eq!(v.len(), 3);
    }
}

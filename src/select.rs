//! Target word selection
//!
//! Either a uniform random pick (optionally seeded, for reproducible runs) or
//! a pick derived from the calendar date so every player gets the same word
//! on the same day.

use crate::core::Word;
use chrono::{Datelike, Local, NaiveDate};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::debug;

/// Days from 0001-01-01 (day 1) to 2021-06-19, the first daily word
const DAILY_EPOCH_DAYS_FROM_CE: i64 = 737_960;

#[derive(Debug, Clone)]
pub enum TargetSelector {
    Random(StdRng),
    Daily(NaiveDate),
}

impl TargetSelector {
    /// Uniform random choice; a seed makes the sequence of picks repeatable
    #[must_use]
    pub fn random(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::Random(rng)
    }

    /// Date-seeded choice for the given day
    #[must_use]
    pub const fn daily(date: NaiveDate) -> Self {
        Self::Daily(date)
    }

    /// Date-seeded choice for today in local time
    #[must_use]
    pub fn today() -> Self {
        Self::daily(Local::now().date_naive())
    }

    /// Pick `daily` or `random` based on the `seed_from_date` setting
    #[must_use]
    pub fn from_settings(seed_from_date: bool, seed: Option<u64>) -> Self {
        if seed_from_date {
            Self::today()
        } else {
            Self::random(seed)
        }
    }

    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self, Self::Daily(_))
    }

    /// Choose a target from `candidates`
    ///
    /// Returns `None` only when `candidates` is empty.
    pub fn select<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        let choice = match self {
            Self::Random(rng) => candidates.choose(rng),
            Self::Daily(date) => daily_index(*date, candidates.len()).map(|i| &candidates[i]),
        };

        if choice.is_some() {
            debug!(daily = self.is_daily(), candidates = candidates.len(), "target selected");
        }

        choice
    }
}

/// Index of the word for `date` in a list of `len` words
///
/// Dates before the epoch wrap around rather than failing.
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let days = i64::from(date.num_days_from_ce()) - DAILY_EPOCH_DAYS_FROM_CE;
    let len = i64::try_from(len).ok()?;
    usize::try_from(days.rem_euclid(len)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_index_starts_at_epoch() {
        assert_eq!(daily_index(date(2021, 6, 19), 10), Some(0));
        assert_eq!(daily_index(date(2021, 6, 20), 10), Some(1));
        assert_eq!(daily_index(date(2021, 6, 29), 10), Some(0));
    }

    #[test]
    fn daily_index_wraps_before_epoch() {
        assert_eq!(daily_index(date(2021, 6, 18), 10), Some(9));
    }

    #[test]
    fn daily_index_empty_list() {
        assert_eq!(daily_index(date(2024, 1, 1), 0), None);
    }

    #[test]
    fn daily_selection_is_stable_for_a_date() {
        let candidates = words(&["crane", "slate", "trace", "brine"]);
        let mut a = TargetSelector::daily(date(2026, 10, 18));
        let mut b = TargetSelector::daily(date(2026, 10, 18));

        // 1947 days after the epoch, 1947 % 4 == 3
        assert_eq!(a.select(&candidates).unwrap().text(), "brine");
        assert_eq!(a.select(&candidates), b.select(&candidates));
    }

    #[test]
    fn seeded_random_selection_is_reproducible() {
        let candidates = words(&["crane", "slate", "trace", "brine", "audio"]);
        let mut a = TargetSelector::random(Some(42));
        let mut b = TargetSelector::random(Some(42));

        for _ in 0..10 {
            assert_eq!(a.select(&candidates), b.select(&candidates));
        }
    }

    #[test]
    fn random_selection_comes_from_candidates() {
        let candidates = words(&["crane", "slate"]);
        let mut selector = TargetSelector::random(None);
        let picked = selector.select(&candidates).unwrap();
        assert!(candidates.contains(picked));
    }

    #[test]
    fn empty_candidates_select_nothing() {
        let mut selector = TargetSelector::random(Some(1));
        assert!(selector.select(&[]).is_none());
        let mut daily = TargetSelector::daily(date(2024, 1, 1));
        assert!(daily.select(&[]).is_none());
    }

    #[test]
    fn from_settings_picks_mode() {
        assert!(TargetSelector::from_settings(true, None).is_daily());
        assert!(!TargetSelector::from_settings(false, Some(3)).is_daily());
    }
}

//! Guess scoring
//!
//! Scores a guess against a target using the two-pass multiset rule, which
//! handles duplicate letters exactly:
//! - exact matches always win their position;
//! - every target letter occurrence is claimed by at most one guess position;
//! - surplus duplicates resolve left to right, the rightmost becoming Absent.

use super::{Verdict, Verdicts, Word};
use crate::error::GameError;
use rustc_hash::FxHashMap;

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. Count every letter of the target
/// 2. First pass: mark exact position matches Correct and consume them
/// 3. Second pass, left to right: mark a letter Present while unconsumed
///    occurrences remain, Absent otherwise
///
/// # Errors
/// Returns `GameError::WrongLength` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{score, Verdict, Word};
///
/// let guess = Word::new("trace").unwrap();
/// let target = Word::new("crane").unwrap();
/// let verdicts = score(&guess, &target).unwrap();
///
/// // T(absent) R(correct) A(correct) C(present) E(correct)
/// assert_eq!(
///     verdicts.as_slice(),
///     &[Verdict::Absent, Verdict::Correct, Verdict::Correct, Verdict::Present, Verdict::Correct]
/// );
/// ```
pub fn score(guess: &Word, target: &Word) -> Result<Verdicts, GameError> {
    if guess.len() != target.len() {
        return Err(GameError::WrongLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let mut result = vec![Verdict::Absent; guess.len()];
    let mut available = target.letter_counts();

    // First pass: exact matches
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            result[i] = Verdict::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from whatever the first pass left over
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = Verdict::Present;
            *count -= 1;
        }
    }

    Ok(Verdicts::new(result))
}

/// Best verdict seen so far for every guessed letter
///
/// Correct outranks Present, which outranks Absent. Letters that were never
/// guessed are not in the map.
pub fn letter_hints<'a, I>(scored: I) -> FxHashMap<u8, Verdict>
where
    I: IntoIterator<Item = (&'a Word, &'a Verdicts)>,
{
    let mut hints: FxHashMap<u8, Verdict> = FxHashMap::default();

    for (word, verdicts) in scored {
        for (&letter, verdict) in word.letters().iter().zip(verdicts.iter()) {
            hints
                .entry(letter)
                .and_modify(|best| *best = (*best).max(verdict))
                .or_insert(verdict);
        }
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent as A, Correct as C, Present as P};

    fn scored(guess: &str, target: &str) -> Vec<Verdict> {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        score(&guess, &target).unwrap().as_slice().to_vec()
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(scored("abcde", "fghij"), [A, A, A, A, A]);
    }

    #[test]
    fn score_all_correct() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert_eq!(scored(word, word), [C, C, C, C, C]);
        }
    }

    #[test]
    fn score_trace_against_crane() {
        // Pass 1: R and A and E exact; pass 2: C found once in the remainder
        assert_eq!(scored("trace", "crane"), [A, C, C, P, C]);
    }

    #[test]
    fn score_erase_against_speed() {
        // Target SPEED holds two E's; the guess's E's at 0 and 4 take both
        assert_eq!(scored("erase", "speed"), [P, A, A, P, P]);
    }

    #[test]
    fn score_speed_against_erase() {
        assert_eq!(scored("speed", "erase"), [P, A, P, P, A]);
    }

    #[test]
    fn score_llama_against_allow() {
        // L at 1 is exact and consumes one L; the other L and the first A are
        // misplaced; the second A has nothing left to claim
        assert_eq!(scored("llama", "allow"), [P, C, P, A, A]);
    }

    #[test]
    fn score_leftmost_duplicate_wins_present() {
        // STEAL has one E: only the leftmost guessed E is Present
        assert_eq!(scored("eerie", "steal"), [P, A, A, A, A]);
    }

    #[test]
    fn score_exact_match_beats_earlier_misplaced() {
        // CRANE has one E at 4: the exact match claims it, earlier E's go Absent
        assert_eq!(scored("eerie", "crane"), [A, A, P, A, C]);
    }

    #[test]
    fn score_three_repeated_letters() {
        assert_eq!(scored("eeeee", "eerie"), [C, C, A, A, C]);
        assert_eq!(scored("eeeee", "speed"), [A, A, C, C, A]);
        assert_eq!(scored("geese", "eerie"), [A, C, P, A, C]);
    }

    #[test]
    fn score_robot_against_floor() {
        assert_eq!(scored("robot", "floor"), [P, P, A, C, A]);
    }

    #[test]
    fn score_length_mismatch_is_error() {
        let guess = Word::new("cranes").unwrap();
        let target = Word::new("crane").unwrap();
        assert_eq!(
            score(&guess, &target),
            Err(GameError::WrongLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn score_other_lengths() {
        assert_eq!(scored("planet", "planes"), [C, C, C, C, C, A]);
        assert_eq!(scored("ab", "ba"), [P, P]);
    }

    #[test]
    fn score_long_runs_of_one_letter() {
        let long = "a".repeat(256);
        assert!(scored(&long, &long).iter().all(|&v| v == C));

        // One target A is left unclaimed after the exact matches, so the
        // leading guessed A takes it
        let target = format!("b{}", "a".repeat(256));
        let guess = format!("ab{}", "a".repeat(255));
        let verdicts = scored(&guess, &target);
        assert_eq!(verdicts[0], P);
        assert_eq!(verdicts[1], P);
        assert!(verdicts[2..].iter().all(|&v| v == C));
    }

    #[test]
    fn score_is_idempotent() {
        let guess = Word::new("llama").unwrap();
        let target = Word::new("allow").unwrap();
        let first = score(&guess, &target).unwrap();
        let second = score(&guess, &target).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn letter_hints_keep_best_verdict() {
        let w1 = Word::new("eerie").unwrap();
        let v1 = Verdicts::new(scored("eerie", "crane"));
        let w2 = Word::new("crane").unwrap();
        let v2 = Verdicts::new(scored("crane", "crane"));

        let hints = letter_hints([(&w1, &v1), (&w2, &v2)]);

        assert_eq!(hints.get(&b'e'), Some(&C));
        assert_eq!(hints.get(&b'r'), Some(&C));
        assert_eq!(hints.get(&b'i'), Some(&A));
        assert_eq!(hints.get(&b'z'), None);
    }
}

//! Property tests for the scorer and session invariants

use proptest::prelude::*;
use wordle_game::core::{Verdict, Word, score};
use wordle_game::game::{GameState, Session};
use wordle_game::GameError;

fn word_over(alphabet: &'static str, len: usize) -> impl Strategy<Value = Word> {
    proptest::collection::vec(prop::sample::select(alphabet.chars().collect::<Vec<_>>()), len)
        .prop_map(|chars| Word::new(chars.into_iter().collect::<String>()).unwrap())
}

/// Words over a small alphabet so duplicates and overlaps are common
fn word(len: usize) -> impl Strategy<Value = Word> {
    word_over("abcels", len)
}

fn pair() -> impl Strategy<Value = (Word, Word)> {
    (1usize..=7).prop_flat_map(|len| (word(len), word(len)))
}

/// Guess and target with no letter in common
fn disjoint_pair() -> impl Strategy<Value = (Word, Word)> {
    (1usize..=7).prop_flat_map(|len| {
        (
            word_over("abcdefghijklm", len),
            word_over("nopqrstuvwxyz", len),
        )
    })
}

fn count(word: &Word, letter: u8) -> usize {
    word.letters().iter().filter(|&&l| l == letter).count()
}

proptest! {
    #[test]
    fn verdicts_match_guess_length((guess, target) in pair()) {
        let verdicts = score(&guess, &target).unwrap();
        prop_assert_eq!(verdicts.len(), guess.len());
    }

    #[test]
    fn identical_words_are_all_correct(target in (1usize..=7).prop_flat_map(word)) {
        let verdicts = score(&target, &target).unwrap();
        prop_assert!(verdicts.is_all_correct());
    }

    #[test]
    fn exact_positions_are_always_correct((guess, target) in pair()) {
        let verdicts = score(&guess, &target).unwrap();
        for i in 0..guess.len() {
            if guess.letter_at(i) == target.letter_at(i) {
                prop_assert_eq!(verdicts[i], Verdict::Correct);
            } else {
                prop_assert_ne!(verdicts[i], Verdict::Correct);
            }
        }
    }

    #[test]
    fn matched_letters_never_exceed_target_count((guess, target) in pair()) {
        let verdicts = score(&guess, &target).unwrap();
        for &letter in guess.letters() {
            let matched = guess
                .letters()
                .iter()
                .zip(verdicts.iter())
                .filter(|&(&l, v)| l == letter && v != Verdict::Absent)
                .count();
            prop_assert!(matched <= count(&target, letter));
            // Nothing is left unclaimed while a copy of the letter is Absent
            prop_assert_eq!(matched, count(&guess, letter).min(count(&target, letter)));
        }
    }

    #[test]
    fn present_letters_precede_absent_duplicates((guess, target) in pair()) {
        let verdicts = score(&guess, &target).unwrap();
        for i in 0..guess.len() {
            for j in (i + 1)..guess.len() {
                if guess.letter_at(i) == guess.letter_at(j)
                    && verdicts[j] == Verdict::Present
                {
                    prop_assert_ne!(verdicts[i], Verdict::Absent);
                }
            }
        }
    }

    #[test]
    fn disjoint_words_are_all_absent((guess, target) in disjoint_pair()) {
        let verdicts = score(&guess, &target).unwrap();
        prop_assert_eq!(verdicts.count(Verdict::Absent), guess.len());
        let verdicts = score(&target, &guess).unwrap();
        prop_assert_eq!(verdicts.count(Verdict::Absent), target.len());
    }

    #[test]
    fn scoring_is_idempotent((guess, target) in pair()) {
        prop_assert_eq!(score(&guess, &target).unwrap(), score(&guess, &target).unwrap());
    }

    #[test]
    fn rejected_guesses_leave_session_unchanged(
        target in word(5),
        guesses in proptest::collection::vec("[a-z0-9]{3,6}", 1..12),
        valid in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let mut session = Session::new(target, 6).unwrap();
        for (guess, &is_valid) in guesses.iter().zip(&valid) {
            let before = session.attempt_count();
            match session.submit_guess(guess, is_valid) {
                Ok(attempt) => {
                    prop_assert_eq!(attempt.sequence(), before + 1);
                    prop_assert_eq!(session.attempt_count(), before + 1);
                }
                Err(_) => prop_assert_eq!(session.attempt_count(), before),
            }
            prop_assert!(session.attempt_count() <= session.max_attempts());
        }
    }
}

#[test]
fn full_game_until_exhaustion() {
    let mut session = Session::new(Word::new("allow").unwrap(), 3).unwrap();

    let first = session.submit_guess("llama", true).unwrap();
    assert_eq!(first.verdicts().to_string(), "YGY--");
    assert_eq!(
        session.submit_guess("llama", true),
        Err(GameError::DuplicateGuess("llama".to_string()))
    );
    assert_eq!(session.attempt_count(), 1);

    session.submit_guess("speed", true).unwrap();
    session.submit_guess("erase", true).unwrap();

    assert!(session.is_exhausted());
    assert_eq!(session.state(), GameState::Lost);
    assert_eq!(session.submit_guess("allow", true), Err(GameError::SessionOver));
}

//! Session shared between several callers of the same game
//!
//! Every operation holds the lock for its full duration, so attempts stay
//! append-only with gap-free sequence numbers no matter how calls interleave.

use super::{Attempt, GameState, Session};
use crate::error::GameError;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to one session behind a mutex
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // `submit_guess` never leaves a half-applied change behind, so the value
    // under a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// See [`Session::submit_guess`]
    ///
    /// # Errors
    /// Same as [`Session::submit_guess`].
    pub fn submit_guess(&self, input: &str, is_known_valid: bool) -> Result<Attempt, GameError> {
        self.lock().submit_guess(input, is_known_valid)
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.lock().state()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.lock().remaining_attempts()
    }

    /// Copy of the session as it is right now
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::thread;

    #[test]
    fn concurrent_guesses_keep_sequence_gap_free() {
        let target = Word::new("zzzzz").unwrap();
        let shared = SharedSession::new(Session::new(target, 8).unwrap());
        let guesses = [
            "crane", "slate", "trace", "brine", "audio", "pious", "ghost", "lymph",
        ];

        thread::scope(|scope| {
            for guess in guesses {
                let handle = shared.clone();
                scope.spawn(move || handle.submit_guess(guess, true).unwrap());
            }
        });

        let session = shared.snapshot();
        let sequences: Vec<usize> = session.attempts().iter().map(Attempt::sequence).collect();
        assert_eq!(sequences, (1..=8).collect::<Vec<_>>());
        assert_eq!(shared.state(), GameState::Lost);
        assert_eq!(shared.remaining_attempts(), 0);
    }

    #[test]
    fn concurrent_duplicates_accept_exactly_one() {
        let target = Word::new("crane").unwrap();
        let shared = SharedSession::new(Session::new(target, 6).unwrap());

        let results: Vec<Result<Attempt, GameError>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let handle = shared.clone();
                    scope.spawn(move || handle.submit_guess("slate", true))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(shared.snapshot().attempt_count(), 1);
    }
}

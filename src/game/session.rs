//! Game session state
//!
//! A [`Session`] owns the cumulative score and judges one submitted word
//! at a time. The judgement itself is deterministic; all I/O and timing
//! live in [`crate::game::play`].

use crate::core::{ROUND_TIME_LIMIT_SECS, is_valid_length, time_bonus, word_score};
use crate::wordlists::Dictionary;
use std::time::Duration;

/// How a single round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player asked to leave; ends the whole session
    Quit,
    /// The response took longer than the time limit
    Timeout,
    /// The input contained something other than letters
    InvalidFormat,
    /// Letters only, but not the required number of them
    InvalidLength { required: usize, actual: usize },
    /// A real-looking word that the dictionary does not accept
    NotInDictionary,
    /// A valid word: letter score, time bonus, and the running total
    Scored { letters: u32, bonus: u32, total: u32 },
}

impl RoundOutcome {
    /// True for outcomes that consume a round slot without scoring
    #[must_use]
    pub const fn is_forfeit(self) -> bool {
        !matches!(self, Self::Quit | Self::Scored { .. })
    }
}

/// One play-through: cumulative score plus the dictionary it validates
/// against
#[derive(Debug)]
pub struct Session {
    dictionary: Dictionary,
    total: u32,
}

impl Session {
    /// Start a session with the embedded dictionary and a zero score
    #[must_use]
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::embedded())
    }

    /// Start a session against a specific dictionary
    #[must_use]
    pub const fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            total: 0,
        }
    }

    /// Cumulative score so far
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Judge one submitted line against the round's constraints
    ///
    /// Checks run in a fixed order: quit, timeout, format, length,
    /// dictionary, then scoring. The first failed check decides the
    /// outcome, and only `Scored` changes the total.
    pub fn judge(&mut self, input: &str, required: usize, elapsed: Duration) -> RoundOutcome {
        if input.eq_ignore_ascii_case("quit") {
            return RoundOutcome::Quit;
        }
        if elapsed > Duration::from_secs(ROUND_TIME_LIMIT_SECS) {
            return RoundOutcome::Timeout;
        }
        if input.is_empty() || !input.chars().all(char::is_alphabetic) {
            return RoundOutcome::InvalidFormat;
        }
        if !is_valid_length(input, required) {
            return RoundOutcome::InvalidLength {
                required,
                actual: input.chars().count(),
            };
        }
        if !self.dictionary.contains(input) {
            return RoundOutcome::NotInDictionary;
        }

        // A scoring failure forfeits the round, it never aborts the session.
        let Ok(letters) = word_score(input) else {
            return RoundOutcome::InvalidFormat;
        };
        let bonus = time_bonus(elapsed);
        self.total += letters + bonus;
        RoundOutcome::Scored {
            letters,
            bonus,
            total: self.total,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

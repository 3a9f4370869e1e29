//! Word scoring and round validation
//!
//! Pure functions over the letter value table: whole-word scores, the
//! response-time bonus, and the per-round length check.

use super::letters::{ScoreError, letter_score};
use std::time::Duration;

/// Seconds allowed per round; also the ceiling of the time bonus.
pub const ROUND_TIME_LIMIT_SECS: u64 = 15;

/// Score a whole word, case-insensitively
///
/// Sums [`letter_score`] over every character. The empty string scores 0.
///
/// # Errors
/// Returns the first `InvalidCharacter` encountered; no partial score is
/// produced.
///
/// # Examples
/// ```
/// use word_sprint::core::word_score;
///
/// assert_eq!(word_score("cabbage"), Ok(14));
/// assert_eq!(word_score("CaBbaGe"), Ok(14));
/// assert!(word_score("cabbage1").is_err());
/// ```
pub fn word_score(word: &str) -> Result<u32, ScoreError> {
    word.chars().map(letter_score).sum()
}

/// Time bonus for a fast response
///
/// One point for every full second left on the clock:
/// `max(0, 15 - floor(elapsed_secs))`.
#[must_use]
pub fn time_bonus(elapsed: Duration) -> u32 {
    ROUND_TIME_LIMIT_SECS.saturating_sub(elapsed.as_secs()) as u32
}

/// Check a word against the round's required length
///
/// Exact match on character count.
#[must_use]
pub fn is_valid_length(word: &str, required: usize) -> bool {
    word.chars().count() == required
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_score_sums_letter_values() {
        // c=3 a=1 b=3 b=3 a=1 g=2 e=1
        assert_eq!(word_score("cabbage"), Ok(14));
        // c=3 a=1 t=1
        assert_eq!(word_score("cat"), Ok(5));
        // q=10 u=1 i=1 z=10
        assert_eq!(word_score("quiz"), Ok(22));
    }

    #[test]
    fn word_score_is_case_insensitive() {
        assert_eq!(word_score("CaBbaGe"), Ok(14));
        assert_eq!(word_score("CABBAGE"), word_score("cabbage"));
    }

    #[test]
    fn word_score_empty_is_zero() {
        assert_eq!(word_score(""), Ok(0));
    }

    #[test]
    fn word_score_rejects_non_letters() {
        assert_eq!(
            word_score("cabbage1"),
            Err(ScoreError::InvalidCharacter('1'))
        );
        assert_eq!(word_score("ca t"), Err(ScoreError::InvalidCharacter(' ')));
        assert_eq!(word_score("cat!"), Err(ScoreError::InvalidCharacter('!')));
        assert_eq!(word_score("café"), Err(ScoreError::InvalidCharacter('é')));
    }

    #[test]
    fn word_score_reports_first_bad_character() {
        assert_eq!(word_score("c1t2"), Err(ScoreError::InvalidCharacter('1')));
    }

    #[test]
    fn word_score_is_idempotent() {
        let first = word_score("journey");
        assert_eq!(word_score("journey"), first);
        assert_eq!(word_score("journey"), first);
    }

    #[test]
    fn time_bonus_counts_whole_seconds_remaining() {
        assert_eq!(time_bonus(Duration::ZERO), 15);
        assert_eq!(time_bonus(Duration::from_secs(5)), 10);
        assert_eq!(time_bonus(Duration::from_millis(5_900)), 10);
        assert_eq!(time_bonus(Duration::from_millis(14_900)), 1);
    }

    #[test]
    fn time_bonus_floors_at_zero() {
        assert_eq!(time_bonus(Duration::from_secs(15)), 0);
        assert_eq!(time_bonus(Duration::from_secs(20)), 0);
        assert_eq!(time_bonus(Duration::from_secs(1_000)), 0);
    }

    #[test]
    fn length_check_is_exact() {
        assert!(is_valid_length("apple", 5));
        assert!(!is_valid_length("apple", 4));
        assert!(!is_valid_length("apple", 6));
        assert!(is_valid_length("", 0));
        assert!(!is_valid_length("", 3));
    }
}

//! Core domain logic
//!
//! Pure scoring and validation functions with no I/O. Everything here is
//! deterministic over the fixed letter value table.

mod letters;
mod score;

pub use letters::{ScoreError, letter_score};
pub use score::{ROUND_TIME_LIMIT_SECS, is_valid_length, time_bonus, word_score};

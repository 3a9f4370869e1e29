//! Interactive round loop
//!
//! Runs up to ten rounds over stdin/stdout. The timeout is retrospective:
//! the blocking read is never interrupted, the elapsed time is only
//! checked once the line arrives.

use crate::game::session::{RoundOutcome, Session};
use crate::output::{print_final_score, print_outcome, print_round_banner, print_welcome};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Rounds in a full session
pub const ROUNDS: u32 = 10;

/// Shortest required word length
pub const MIN_LENGTH: usize = 3;

/// Longest required word length
pub const MAX_LENGTH: usize = 8;

/// Play one full session, drawing round lengths from `rng`
///
/// Returns the final total score.
///
/// # Errors
/// Returns an error if reading stdin or writing stdout fails.
pub fn play(rng: &mut impl Rng) -> Result<u32> {
    let mut session = Session::new();
    print_welcome();

    for round in 1..=ROUNDS {
        let required = rng.random_range(MIN_LENGTH..=MAX_LENGTH);
        print_round_banner(round, required);

        let start = Instant::now();
        let Some(word) = read_word(required)? else {
            // stdin closed mid-game; treat it like an explicit quit
            print_outcome(RoundOutcome::Quit);
            break;
        };
        let elapsed = start.elapsed();

        let outcome = session.judge(&word, required, elapsed);
        print_outcome(outcome);
        if outcome == RoundOutcome::Quit {
            break;
        }
    }

    print_final_score(session.total());
    Ok(session.total())
}

/// Prompt for one word; `None` once stdin reaches end of input
fn read_word(required: usize) -> Result<Option<String>> {
    print!("Enter a word of length {required}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

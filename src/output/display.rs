//! Display functions for the round loop
//!
//! One status line per round outcome, plus the session banners.

use crate::core::ROUND_TIME_LIMIT_SECS;
use crate::game::RoundOutcome;
use colored::Colorize;

/// Print the session welcome banner
pub fn print_welcome() {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                       Word Sprint                        ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!("\nType a word of the requested length before the clock runs out.");
    println!("Letters score Scrabble values; fast answers earn a time bonus.");
}

/// Print the per-round banner: round number, required length, time limit
pub fn print_round_banner(round: u32, required: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Round {}: enter a word of length {}. You have {} seconds.",
        round.to_string().bold(),
        required.to_string().bright_yellow().bold(),
        ROUND_TIME_LIMIT_SECS
    );
    println!("{}", "Type 'quit' to exit the game.".bright_black());
}

/// Print exactly one status line describing how the round ended
pub fn print_outcome(outcome: RoundOutcome) {
    match outcome {
        RoundOutcome::Quit => {
            println!("{}", "You have chosen to quit the game.".yellow());
        }
        RoundOutcome::Timeout => {
            println!("{}", "Time's up! You took too long.".red());
        }
        RoundOutcome::InvalidFormat => {
            println!("{}", "Invalid input. Please enter only alphabets.".red());
        }
        RoundOutcome::InvalidLength { required, .. } => {
            println!(
                "{}",
                format!("Invalid word length. Expected {required} letters.").red()
            );
        }
        RoundOutcome::NotInDictionary => {
            println!(
                "{}",
                "Invalid word. Please enter a valid word from the dictionary.".red()
            );
        }
        RoundOutcome::Scored {
            letters,
            bonus,
            total,
        } => {
            println!(
                "{}",
                format!(
                    "Your score for this round is {letters}, with a time bonus of {bonus}. \
                     Your total score is now {total}."
                )
                .green()
            );
        }
    }
}

/// Print the end-of-session total
pub fn print_final_score(total: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "{}",
        format!("Game over! Your final total score is {total}.")
            .bright_yellow()
            .bold()
    );
    println!();
}

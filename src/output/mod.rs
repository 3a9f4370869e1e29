//! Terminal output formatting
//!
//! Display utilities for the interactive session.

mod display;

pub use display::{print_final_score, print_outcome, print_round_banner, print_welcome};

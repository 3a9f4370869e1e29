//! Word Sprint
//!
//! A timed terminal word game: each round asks for a word of a randomly
//! chosen length, validates it against an embedded dictionary, and scores
//! it with Scrabble letter values plus a bonus for answering quickly.
//!
//! # Quick Start
//!
//! ```rust
//! use word_sprint::core::word_score;
//! use word_sprint::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! assert!(dictionary.contains("cabbage"));
//! assert_eq!(word_score("cabbage"), Ok(14));
//! ```

// Pure scoring and validation
pub mod core;

// Session state machine and round loop
pub mod game;

// Terminal output formatting
pub mod output;

// The embedded dictionary
pub mod wordlists;

//! Embedded word list
//!
//! The accepted words, compiled into the binary. Small enough to declare
//! directly; every entry is lowercase and 3 to 8 letters long.

/// Every word the game accepts
pub const WORDS: [&str; 39] = [
    "cat", "dog", "hat", "pen", "book", "milk", "bread", "juice", "shoe", "fish", "tree", "chair",
    "table", "house", "phone", "light", "clock", "paper", "mouse", "train", "shirt", "pants",
    "drink", "fruit", "smile", "learn", "study", "write", "bright", "season", "example", "student",
    "winter", "garden", "holiday", "journey", "elevator", "capture", "cabbage",
];

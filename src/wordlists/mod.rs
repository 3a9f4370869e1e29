//! Word lists
//!
//! Provides the embedded dictionary of accepted words and its
//! case-insensitive membership test.

mod embedded;

pub use embedded::WORDS;

use rustc_hash::FxHashSet;

/// The set of words the game accepts
///
/// Built once per session from the embedded list and never mutated.
/// Membership is case-insensitive: input is lowercased before lookup.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<&'static str>,
}

impl Dictionary {
    /// Build the dictionary from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: WORDS.iter().copied().collect(),
        }
    }

    /// Check whether `word` is an accepted word
    ///
    /// # Examples
    /// ```
    /// use word_sprint::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.contains("cat"));
    /// assert!(dictionary.contains("CAT"));
    /// assert!(!dictionary.contains("zzzzz"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

mod dictionary;

pub use dictionary::EnglishDictionary;

/// Outcome of checking one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellCheck {
    /// The word is in the dictionary
    pub known: bool,
    /// Similar known words, best first, lowercase. Empty for known words.
    pub suggestions: Vec<String>,
}

impl SpellCheck {
    pub fn known() -> Self {
        SpellCheck {
            known: true,
            suggestions: Vec::new(),
        }
    }

    pub fn unknown(suggestions: Vec<String>) -> Self {
        SpellCheck {
            known: false,
            suggestions,
        }
    }
}

/// Dictionary lookup with suggestions for misspelled words
pub trait SpellChecker {
    /// Check a single word; comparison is case-insensitive
    fn check(&self, word: &str) -> SpellCheck;
}

use crate::error::FinderError;
use crate::spellcheck::{SpellCheck, SpellChecker};
use log::{debug, info};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::path::Path;

/// Word list backed spell checker.
///
/// Words are stored uppercase. Suggestions are ranked by normalized
/// Levenshtein similarity, ties broken alphabetically. This is not the
/// ranking of Python's `difflib.get_close_matches` (ratio scores, ties in
/// reverse alphabetical order), so menus may list equal-scoring words in a
/// different order than a difflib-based checker would.
#[derive(Debug, Clone)]
pub struct EnglishDictionary {
    words: BTreeSet<String>,
    max_suggestions: usize,
    cutoff: f64,
}

impl EnglishDictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        EnglishDictionary {
            words,
            max_suggestions: 3,
            cutoff: 0.6,
        }
    }

    /// Limit suggestions to `max_suggestions` words scoring at least `cutoff`
    pub fn with_suggestion_limits(mut self, max_suggestions: usize, cutoff: f64) -> Self {
        self.max_suggestions = max_suggestions;
        self.cutoff = cutoff;
        self
    }

    /// Build from a JSON object whose keys are the dictionary words
    pub fn from_json_str(json: &str) -> Result<Self, FinderError> {
        let entries: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self::new(entries.keys()))
    }

    /// Build from newline separated words
    pub fn from_word_list(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Load a dictionary file.
    ///
    /// `.json` files are read as an object keyed by word (values ignored),
    /// anything else as one word per line.
    pub fn load(path: &Path) -> Result<Self, FinderError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let dictionary = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_word_list(&content)
        };

        if dictionary.is_empty() {
            return Err(FinderError::EmptyDictionary(path.display().to_string()));
        }
        info!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    fn close_matches(&self, word: &str) -> Vec<String> {
        let target = word.to_uppercase();
        let mut scored: Vec<(f64, &String)> = self
            .words
            .iter()
            .map(|candidate| (strsim::normalized_levenshtein(&target, candidate), candidate))
            .filter(|(score, _)| *score >= self.cutoff)
            .collect();

        // BTreeSet iteration is alphabetical and the sort is stable
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(self.max_suggestions);

        scored
            .into_iter()
            .map(|(_, candidate)| candidate.to_lowercase())
            .collect()
    }
}

impl SpellChecker for EnglishDictionary {
    fn check(&self, word: &str) -> SpellCheck {
        if self.contains(word) {
            return SpellCheck::known();
        }
        let suggestions = self.close_matches(word);
        debug!("'{}' not in dictionary, suggesting {:?}", word, suggestions);
        SpellCheck::unknown(suggestions)
    }
}

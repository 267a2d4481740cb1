//! Expansion of per-word spelling alternatives into whole-ingredient
//! candidates.

use crate::spellcheck::SpellCheck;

/// Alternatives for one word: the word as entered, followed by the
/// spell-checker's suggestions when it is not known.
pub fn word_alternatives(word: &str, check: SpellCheck) -> Vec<String> {
    let mut alternatives = vec![word.to_lowercase()];
    if !check.known {
        alternatives.extend(check.suggestions);
    }
    alternatives
}

/// Cartesian product of `alternatives`, each candidate space-joined.
///
/// Candidates are ordered by the index chosen at each position, the last
/// position varying fastest. An empty input, or any empty list, yields no
/// candidates.
pub fn expand(alternatives: &[Vec<String>]) -> Vec<String> {
    if alternatives.is_empty() || alternatives.iter().any(Vec::is_empty) {
        return Vec::new();
    }

    let total: usize = alternatives.iter().map(Vec::len).product();
    let mut candidates = Vec::with_capacity(total);
    let mut indices = vec![0usize; alternatives.len()];

    loop {
        let candidate = indices
            .iter()
            .zip(alternatives)
            .map(|(&i, words)| words[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        candidates.push(candidate);

        // Odometer step: bump the last position, carrying leftwards
        let mut position = indices.len();
        loop {
            if position == 0 {
                return candidates;
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < alternatives[position].len() {
                break;
            }
            indices[position] = 0;
        }
    }
}

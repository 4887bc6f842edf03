//! Word analysis command
//!
//! Lists the one-edit neighbours of a word, grouped by edit kind, and scores
//! it against an optional target.

use crate::core::{normalize, word_distance};
use crate::lexicon::Lexicon;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub adders: Vec<String>,
    pub removers: Vec<String>,
    pub replacements: Vec<String>,
    /// Target word and the heuristic distance to it
    pub target: Option<(String, usize)>,
}

impl AnalysisResult {
    /// Distinct neighbours across all edit kinds
    #[must_use]
    pub fn degree(&self) -> usize {
        self.adders.len() + self.removers.len() + self.replacements.len()
    }
}

/// Analyze the neighbourhood of a word
///
/// # Errors
///
/// Returns an error if:
/// - The word is not purely alphabetic
/// - The word is not in the lexicon
pub fn analyze_word(
    lexicon: &Lexicon,
    word: &str,
    target: Option<&str>,
) -> Result<AnalysisResult, String> {
    let word = normalize(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !lexicon.is_word(&word) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let target = match target {
        Some(target) => {
            let target = normalize(target).map_err(|e| format!("Invalid target: {e}"))?;
            let distance = word_distance(&word, &target);
            Some((target, distance))
        }
        None => None,
    };

    Ok(AnalysisResult {
        adders: lexicon.find_adder_words(&word).into_iter().collect(),
        removers: lexicon.find_remover_words(&word).into_iter().collect(),
        replacements: lexicon.find_replacement_words(&word).into_iter().collect(),
        word,
        target,
    })
}

//! Compound word decomposition.
//!
//! German writes compounds as one word (`Dampfschifffahrtskapitänsmützen`),
//! so a query for `Mütze` never meets the indexed compound unless the
//! compound is split. This module provides the three pieces the splitting is
//! built from:
//!
//! - [`hyphenation::HyphenationTree`] - Liang/TeX patterns proposing break points
//! - [`dictionary::WordDictionary`] - the word list validating candidate parts
//! - [`decomposer::CompoundDecomposer`] - picks the split and its primary word
//!
//! ```text
//! word → hyphenation break points → dictionary-validated suffixes
//!      → longest valid rightmost suffix = primary word
//! ```
//!
//! Trees and dictionaries are immutable once built and meant to be loaded
//! once and shared behind an [`Arc`](std::sync::Arc).

pub mod decomposer;
pub mod dictionary;
pub mod hyphenation;

pub use decomposer::{CompoundDecomposer, CompoundSplit, DecomposerConfig, Subword};
pub use dictionary::WordDictionary;
pub use hyphenation::HyphenationTree;

/// Lowercase a word one char at a time, keeping a one-to-one mapping between
/// input and output chars so char offsets stay valid on the surface form.
pub(crate) fn fold_chars(word: &str) -> Vec<char> {
    word.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_chars_keeps_length() {
        let word = "KapitänsMÜTZE";
        let folded = fold_chars(word);

        assert_eq!(folded.len(), word.chars().count());
        assert_eq!(folded.iter().collect::<String>(), "kapitänsmütze");
    }
}

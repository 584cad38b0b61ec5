//! Compound-aware stemmer.
//!
//! Hunspell dictionaries rarely list every compound, so stemming
//! `kapitänsmützen` as a whole finds nothing. This stemmer first tries the
//! whole word, and when that leaves it unchanged it stems the primary word
//! of the compound and reattaches the prefix:
//!
//! ```text
//! "kapitänsmützen" → whole word: no stem
//!                  → primary "mützen" → "mütze"
//!                  → "kapitänsmütze"
//! ```
//!
//! Failures of the underlying stemmer never propagate: the word comes back
//! unchanged and a warning is logged.

use std::sync::Arc;

use log::{trace, warn};

use crate::analysis::compound::CompoundDecomposer;
use crate::analysis::token_filter::stem::{StemResult, Stemmer, differs_ignoring_case};
use crate::error::Result;

/// Stems compound words through their primary word.
#[derive(Clone)]
pub struct CompoundStemmer {
    stemmer: Arc<dyn Stemmer>,
    decomposer: Arc<CompoundDecomposer>,
}

impl std::fmt::Debug for CompoundStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompoundStemmer")
            .field("stemmer", &self.stemmer.name())
            .field("decomposer", &self.decomposer)
            .finish()
    }
}

impl CompoundStemmer {
    pub fn new(stemmer: Arc<dyn Stemmer>, decomposer: Arc<CompoundDecomposer>) -> Self {
        CompoundStemmer {
            stemmer,
            decomposer,
        }
    }

    /// Stem a word, recovering from stemmer failures.
    pub fn stem_word(&self, word: &str) -> StemResult {
        let whole = match self.stemmer.stem(word) {
            Ok(stem) => stem,
            Err(e) => {
                warn!(
                    "stemmer '{}' failed on '{}', keeping token: {}",
                    self.stemmer.name(),
                    word,
                    e
                );
                return StemResult::unchanged(word);
            }
        };
        if differs_ignoring_case(word, &whole) {
            return StemResult::new(word, whole);
        }

        let Some(split) = self.decomposer.decompose(word) else {
            return StemResult::unchanged(word);
        };

        match self.stemmer.stem(&split.primary_word) {
            Ok(primary) if differs_ignoring_case(&split.primary_word, &primary) => {
                let stem = format!("{}{}", split.prefix, primary);
                trace!("stemmed '{word}' through primary word '{}'", split.primary_word);
                StemResult::new(word, stem)
            }
            Ok(_) => StemResult::unchanged(word),
            Err(e) => {
                warn!(
                    "stemmer '{}' failed on primary word '{}' of '{}', keeping token: {}",
                    self.stemmer.name(),
                    split.primary_word,
                    word,
                    e
                );
                StemResult::unchanged(word)
            }
        }
    }
}

impl Stemmer for CompoundStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        Ok(self.stem_word(word).stem)
    }

    fn name(&self) -> &'static str {
        "compound"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compound::{HyphenationTree, WordDictionary};
    use crate::analysis::hunspell::HunspellDictionary;
    use crate::analysis::token_filter::stem::HunspellStemmer;
    use crate::analysis::token_filter::stem::tests::SuffixStemmer;

    fn decomposer() -> Arc<CompoundDecomposer> {
        let tree = HyphenationTree::from_patterns(
            ["s1m", "t1z", "a1p", "i1t"],
            std::iter::empty::<&str>(),
        );
        let dictionary = WordDictionary::from_words(["kapitän", "mütze", "mützen"]).unwrap();
        Arc::new(CompoundDecomposer::with_defaults(
            Arc::new(tree),
            Arc::new(dictionary),
        ))
    }

    fn hunspell() -> Arc<dyn Stemmer> {
        let dictionary = HunspellDictionary::parse(
            "SET UTF-8\nSFX N Y 1\nSFX N 0 n e\n",
            "2\nmütze/N\nkapitän\n",
        )
        .unwrap();
        Arc::new(HunspellStemmer::new(Arc::new(dictionary)))
    }

    #[test]
    fn test_whole_word_stem() {
        let stemmer = CompoundStemmer::new(hunspell(), decomposer());

        let result = stemmer.stem_word("mützen");
        assert_eq!(result.stem, "mütze");
        assert!(result.changed);
    }

    #[test]
    fn test_stem_through_primary_word() {
        let stemmer = CompoundStemmer::new(hunspell(), decomposer());

        let result = stemmer.stem_word("kapitänsmützen");
        assert_eq!(result.stem, "kapitänsmütze");
        assert!(result.changed);
    }

    #[test]
    fn test_unchanged_words() {
        let stemmer = CompoundStemmer::new(hunspell(), decomposer());

        assert!(!stemmer.stem_word("kapitän").changed);
        // A case-only difference is not a stem.
        let result = stemmer.stem_word("Kapitän");
        assert_eq!(result.stem, "Kapitän");
        assert!(!result.changed);
        // Decomposes, but the primary word is already a stem.
        assert_eq!(stemmer.stem_word("kapitänsmütze").stem, "kapitänsmütze");
    }

    #[test]
    fn test_failure_keeps_word() {
        let stemmer = CompoundStemmer::new(Arc::new(SuffixStemmer), decomposer());

        let result = stemmer.stem_word("xylophonen");
        assert_eq!(result.stem, "xylophonen");
        assert!(!result.changed);
        assert_eq!(stemmer.stem("xylophonen").unwrap(), "xylophonen");
    }
}

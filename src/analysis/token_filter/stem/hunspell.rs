//! Hunspell affix-stripping stemmer.
//!
//! A word is its own stem when it is in the dictionary and may stand alone.
//! Otherwise suffix rules, suffix+prefix cross products and prefix rules are
//! undone in that order; every root that is in the dictionary and carries the
//! flags of the undone rules is a stem.
//!
//! ```text
//! "mützen"  SFX N 0 n e   → "mütze"  (mütze/N)
//! "mütze"   in dictionary → "mütze"
//! ```

use std::sync::Arc;

use crate::analysis::hunspell::{AffixRule, HunspellDictionary};
use crate::analysis::token_filter::stem::Stemmer;
use crate::error::Result;

/// Stemmer backed by a Hunspell dictionary.
#[derive(Debug, Clone)]
pub struct HunspellStemmer {
    dictionary: Arc<HunspellDictionary>,
}

impl HunspellStemmer {
    pub fn new(dictionary: Arc<HunspellDictionary>) -> Self {
        HunspellStemmer { dictionary }
    }

    /// Get the dictionary.
    pub fn dictionary(&self) -> &HunspellDictionary {
        &self.dictionary
    }

    /// All stems of a word, deduplicated, in discovery order.
    pub fn stems(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let mut stems: Vec<String> = Vec::new();
        let mut push = |stem: String| {
            if !stems.contains(&stem) {
                stems.push(stem);
            }
        };

        if self.dictionary.is_standalone(&word) {
            push(word.clone());
        }

        for suffix in self.dictionary.suffixes() {
            let Some(root) = suffix.unapply(&word) else {
                continue;
            };
            if self.carries(&root, &[suffix]) {
                push(root.clone());
            }

            if !suffix.cross_product {
                continue;
            }
            for prefix in self.dictionary.prefixes().iter().filter(|p| p.cross_product) {
                if let Some(inner) = prefix.unapply(&root)
                    && self.carries(&inner, &[suffix, prefix])
                {
                    push(inner);
                }
            }
        }

        for prefix in self.dictionary.prefixes() {
            if let Some(root) = prefix.unapply(&word)
                && self.carries(&root, &[prefix])
            {
                push(root);
            }
        }

        stems
    }

    /// Whether `root` is in the dictionary with the flags of all `rules`.
    fn carries(&self, root: &str, rules: &[&AffixRule]) -> bool {
        self.dictionary
            .lookup(root)
            .is_some_and(|flags| rules.iter().all(|rule| flags.contains(&rule.flag)))
    }
}

impl Stemmer for HunspellStemmer {
    /// The first stem found, or the word itself when there is none.
    fn stem(&self, word: &str) -> Result<String> {
        Ok(self
            .stems(word)
            .into_iter()
            .next()
            .unwrap_or_else(|| word.to_string()))
    }

    fn name(&self) -> &'static str {
        "hunspell"
    }
}

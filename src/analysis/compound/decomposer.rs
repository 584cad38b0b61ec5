//! Compound decomposer.
//!
//! Splits a compound word into dictionary-validated constituents and picks
//! its primary word: the longest rightmost constituent that starts at a
//! hyphenation break point and is itself a dictionary word.
//!
//! ```text
//! "Dampfschifffahrtskapitänsmützen"
//!   break points:   dampf|schif|f|fahrt|s|ka|pi|tän|s|müt|zen
//!   suffixes tried: longest first, within the subword size bounds
//!   primary word:   "mützen"
//!   prefix:         dampf + schiff + fahrt(s) + kapitän(s)
//! ```
//!
//! Prefix constituents may end in a linking morpheme (*Fugenelement*) such as
//! the `s` in *Kapitänsmütze*; the morpheme is stripped before the dictionary
//! lookup.

use std::collections::HashSet;
use std::sync::Arc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::compound::dictionary::WordDictionary;
use crate::analysis::compound::fold_chars;
use crate::analysis::compound::hyphenation::HyphenationTree;
use crate::error::{DecompoundError, Result};

/// Linking morphemes recognised between German compound constituents.
pub const DEFAULT_LINKING_MORPHEMES: &[&str] = &["s", "es", "n", "en", "e", "er"];

/// Size bounds and behaviour of the decomposer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecomposerConfig {
    /// Words shorter than this (in chars) are never decomposed.
    pub min_word_size: usize,
    /// Minimum constituent length in chars.
    pub min_subword_size: usize,
    /// Maximum constituent length in chars.
    pub max_subword_size: usize,
    /// Require the part in front of the primary word to split into
    /// dictionary words as well.
    pub validate_prefix: bool,
    /// Endings that may be stripped from prefix constituents.
    pub linking_morphemes: Vec<String>,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        DecomposerConfig {
            min_word_size: 5,
            min_subword_size: 2,
            max_subword_size: 15,
            validate_prefix: true,
            linking_morphemes: DEFAULT_LINKING_MORPHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl DecomposerConfig {
    /// Check the size bounds for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.min_subword_size == 0 {
            return Err(DecompoundError::invalid_config(
                "min_subword_size must be at least 1",
            ));
        }
        if self.min_subword_size > self.max_subword_size {
            return Err(DecompoundError::invalid_config(format!(
                "min_subword_size ({}) must not exceed max_subword_size ({})",
                self.min_subword_size, self.max_subword_size
            )));
        }
        if self.min_word_size < self.min_subword_size {
            return Err(DecompoundError::invalid_config(format!(
                "min_word_size ({}) must not be smaller than min_subword_size ({})",
                self.min_word_size, self.min_subword_size
            )));
        }
        if self.linking_morphemes.iter().any(|m| m.is_empty()) {
            return Err(DecompoundError::invalid_config(
                "linking morphemes must not be empty",
            ));
        }
        Ok(())
    }
}

/// One constituent of a compound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subword {
    /// Surface text of the constituent, including any linking morpheme.
    pub text: String,
    /// Char offset of the constituent in the word.
    pub start: usize,
    /// Char offset one past the end of the constituent.
    pub end: usize,
    /// The stripped linking morpheme, if any.
    pub linking_morpheme: Option<String>,
}

/// The result of decomposing a compound word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundSplit {
    /// The word as given.
    pub word: String,
    /// Surface text in front of the primary word.
    pub prefix: String,
    /// Surface text of the primary word.
    pub primary_word: String,
    /// Char offset at which the primary word starts.
    pub primary_start: usize,
    /// Validated constituents in order, the primary word last. When prefix
    /// validation is disabled only the primary word is listed.
    pub subwords: Vec<Subword>,
}

/// Decomposes compound words using a hyphenation tree and a word dictionary.
#[derive(Debug, Clone)]
pub struct CompoundDecomposer {
    hyphenation: Arc<HyphenationTree>,
    dictionary: Arc<WordDictionary>,
    config: DecomposerConfig,
}

impl CompoundDecomposer {
    /// Create a decomposer. Fails if the configuration is inconsistent.
    pub fn new(
        hyphenation: Arc<HyphenationTree>,
        dictionary: Arc<WordDictionary>,
        config: DecomposerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(CompoundDecomposer {
            hyphenation,
            dictionary,
            config,
        })
    }

    /// Create a decomposer with the default configuration.
    pub fn with_defaults(
        hyphenation: Arc<HyphenationTree>,
        dictionary: Arc<WordDictionary>,
    ) -> Self {
        CompoundDecomposer {
            hyphenation,
            dictionary,
            config: DecomposerConfig::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    /// Get the word dictionary.
    pub fn dictionary(&self) -> &WordDictionary {
        &self.dictionary
    }

    /// Check whether a word decomposes.
    pub fn is_compound(&self, word: &str) -> bool {
        self.decompose(word).is_some()
    }

    /// Decompose a word. Returns `None` if the word is too short, has no
    /// break point, or no suffix at a break point qualifies as primary word.
    pub fn decompose(&self, word: &str) -> Option<CompoundSplit> {
        let surface: Vec<char> = word.chars().collect();
        let n = surface.len();
        if n < self.config.min_word_size {
            return None;
        }

        let folded = fold_chars(word);
        let breaks = self.hyphenation.break_points_folded(&folded);

        for &start in &breaks {
            let len = n - start;
            if len < self.config.min_subword_size || len > self.config.max_subword_size {
                continue;
            }

            let candidate: String = folded[start..].iter().collect();
            if !self.dictionary.contains(&candidate) {
                continue;
            }

            let mut subwords = if self.config.validate_prefix {
                match self.segment_prefix(&folded, &breaks, start) {
                    Some(ranges) => ranges
                        .into_iter()
                        .map(|(from, to, linking_morpheme)| Subword {
                            text: surface[from..to].iter().collect(),
                            start: from,
                            end: to,
                            linking_morpheme,
                        })
                        .collect(),
                    None => {
                        trace!("rejected '{candidate}' in '{word}': prefix does not decompose");
                        continue;
                    }
                }
            } else {
                Vec::new()
            };

            let primary_word: String = surface[start..].iter().collect();
            subwords.push(Subword {
                text: primary_word.clone(),
                start,
                end: n,
                linking_morpheme: None,
            });

            trace!("decomposed '{word}' with primary word '{primary_word}'");
            return Some(CompoundSplit {
                word: word.to_string(),
                prefix: surface[..start].iter().collect(),
                primary_word,
                primary_start: start,
                subwords,
            });
        }

        None
    }

    /// Split `word[..end]` at break points into valid constituents, trying
    /// longer constituents first. Returns `(start, end, linking morpheme)`
    /// ranges.
    fn segment_prefix(
        &self,
        word: &[char],
        breaks: &[usize],
        end: usize,
    ) -> Option<Vec<(usize, usize, Option<String>)>> {
        let mut points = Vec::with_capacity(breaks.len() + 2);
        points.push(0);
        points.extend(breaks.iter().copied().filter(|&b| b < end));
        points.push(end);

        let mut dead_ends = HashSet::new();
        let mut ranges = Vec::new();
        if self.segment_from(word, &points, 0, &mut dead_ends, &mut ranges) {
            Some(ranges)
        } else {
            None
        }
    }

    fn segment_from(
        &self,
        word: &[char],
        points: &[usize],
        index: usize,
        dead_ends: &mut HashSet<usize>,
        ranges: &mut Vec<(usize, usize, Option<String>)>,
    ) -> bool {
        if index == points.len() - 1 {
            return true;
        }
        if dead_ends.contains(&index) {
            return false;
        }

        let from = points[index];
        for next in (index + 1..points.len()).rev() {
            let to = points[next];
            let Some(linking_morpheme) = self.constituent(&word[from..to]) else {
                continue;
            };

            ranges.push((from, to, linking_morpheme));
            if self.segment_from(word, points, next, dead_ends, ranges) {
                return true;
            }
            ranges.pop();
        }

        dead_ends.insert(index);
        false
    }

    /// Check a prefix constituent. Returns the stripped linking morpheme
    /// (`Some(None)` for an exact dictionary word) or `None` if invalid.
    fn constituent(&self, part: &[char]) -> Option<Option<String>> {
        let len = part.len();
        if len < self.config.min_subword_size || len > self.config.max_subword_size {
            return None;
        }

        let text: String = part.iter().collect();
        if self.dictionary.contains(&text) {
            return Some(None);
        }

        self.config.linking_morphemes.iter().find_map(|morpheme| {
            let root = text.strip_suffix(morpheme.as_str())?;
            let root_len = len - morpheme.chars().count();
            (root_len >= self.config.min_subword_size && self.dictionary.contains(root))
                .then(|| Some(morpheme.clone()))
        })
    }
}

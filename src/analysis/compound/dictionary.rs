//! Word dictionary backed by an FST set.
//!
//! Holds the lowercase word list used to validate compound constituents.
//! The file format is one word per line; blank lines and lines starting with
//! `#` are ignored.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use fst::{Set, SetBuilder};
use log::debug;

use super::fold_chars;
use crate::error::{DecompoundError, Result};

/// An immutable set of lowercase words.
#[derive(Clone)]
pub struct WordDictionary {
    words: Arc<Set<Vec<u8>>>,
}

impl std::fmt::Debug for WordDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordDictionary")
            .field("len", &self.len())
            .finish()
    }
}

impl WordDictionary {
    /// Build a dictionary from words. Words are lowercased the way lookups
    /// fold them (one char per char) and deduplicated; empty entries are
    /// skipped.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| fold_chars(w.as_ref().trim()).into_iter().collect::<String>())
            .filter(|w| !w.is_empty())
            .collect();
        sorted.sort();
        sorted.dedup();

        let mut builder = SetBuilder::memory();
        for word in &sorted {
            builder
                .insert(word.as_bytes())
                .map_err(|e| DecompoundError::parse(format!("FST build error: {}", e)))?;
        }

        let fst_bytes = builder
            .into_inner()
            .map_err(|e| DecompoundError::parse(format!("FST finalize error: {}", e)))?;
        let set = Set::new(fst_bytes)
            .map_err(|e| DecompoundError::parse(format!("FST creation error: {}", e)))?;

        Ok(WordDictionary {
            words: Arc::new(set),
        })
    }

    /// Parse a word list.
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a word list from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DecompoundError::resource(format!(
                "Failed to read word dictionary '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dictionary = Self::parse(&content)?;
        debug!(
            "loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Check whether an already lowercased word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.as_bytes())
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_words() {
        let dictionary = WordDictionary::from_words(["Mütze", "haus", "mütze", " tür "]).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("mütze"));
        assert!(dictionary.contains("tür"));
        assert!(!dictionary.contains("Mütze"));
        assert!(!dictionary.contains("hau"));
    }

    #[test]
    fn test_entries_fold_like_lookups() {
        // 'İ' lowercases to two chars; lookups keep only the first.
        let dictionary = WordDictionary::from_words(["İNSEL", "Straße"]).unwrap();

        assert!(dictionary.contains("insel"));
        assert!(dictionary.contains("straße"));
        assert!(!dictionary.contains("i\u{307}nsel"));
    }

    #[test]
    fn test_parse_skips_comments() {
        let dictionary = WordDictionary::parse("# Wörter\nhaus\n\n  tür\n#kommentar\n").unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(!dictionary.contains("#kommentar"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dampf\nschiff\nfahrt").unwrap();

        let dictionary = WordDictionary::load(file.path()).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("schiff"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = WordDictionary::load("/nonexistent/words.txt");
        assert!(matches!(result, Err(DecompoundError::Resource(_))));
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = WordDictionary::from_words(Vec::<String>::new()).unwrap();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("haus"));
    }
}

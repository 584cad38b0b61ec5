//! Stemming token filter and stemmer implementations.
//!
//! A [`Stemmer`] reduces a single word to its stem and may fail, for
//! instance when a dictionary lookup goes wrong. The [`StemFilter`] never
//! lets such a failure abort analysis: the token is passed on unchanged and
//! a warning is logged.

use std::sync::Arc;

use log::warn;
use serde::Serialize;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> Result<String>;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod compound;
pub mod hunspell;
pub mod identity;

// Re-export stemmers
pub use compound::CompoundStemmer;
pub use hunspell::HunspellStemmer;
pub use identity::IdentityStemmer;

/// The outcome of stemming one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemResult {
    /// The stem (or the input when nothing applied).
    pub stem: String,
    /// Whether the stem differs from the input, ignoring case.
    pub changed: bool,
}

impl StemResult {
    pub fn new<S: Into<String>>(word: &str, stem: S) -> Self {
        let stem = stem.into();
        StemResult {
            changed: differs_ignoring_case(word, &stem),
            stem,
        }
    }

    /// A result that leaves the word as it is.
    pub fn unchanged(word: &str) -> Self {
        StemResult {
            stem: word.to_string(),
            changed: false,
        }
    }
}

/// Compare two words case-insensitively.
pub(crate) fn differs_ignoring_case(a: &str, b: &str) -> bool {
    a != b && a.to_lowercase() != b.to_lowercase()
}

/// Filter that applies stemming to tokens.
///
/// Stopped and keyword tokens are passed through.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Stem one word, falling back to the word itself on failure.
    pub fn stem_or_keep(stemmer: &dyn Stemmer, word: &str) -> StemResult {
        match stemmer.stem(word) {
            Ok(stem) => StemResult::new(word, stem),
            Err(e) => {
                warn!("stemmer '{}' failed on '{}': {}", stemmer.name(), word, e);
                StemResult::unchanged(word)
            }
        }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::with_stemmer(Arc::new(IdentityStemmer::new()))
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(tokens.map(move |token| {
            if token.is_stopped() || token.is_keyword() {
                return token;
            }
            let result = Self::stem_or_keep(stemmer.as_ref(), &token.text);
            if result.changed {
                let original = token.text.clone();
                token.with_text(result.stem).with_original_text(original)
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::error::DecompoundError;

    /// Strips a trailing "en" and fails on words starting with "x".
    pub(crate) struct SuffixStemmer;

    impl Stemmer for SuffixStemmer {
        fn stem(&self, word: &str) -> Result<String> {
            if word.starts_with('x') {
                return Err(DecompoundError::analysis("lookup failed"));
            }
            Ok(word.strip_suffix("en").unwrap_or(word).to_string())
        }

        fn name(&self) -> &'static str {
            "suffix"
        }
    }

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::with_stemmer(Arc::new(SuffixStemmer));
        let tokens = vec![
            Token::new("mützen", 0),
            Token::new("haus", 1),
            Token::new("laufen", 2).stop(),
            Token::new("kapitänen", 3).mark_keyword(),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "mütz");
        assert_eq!(
            result[0].metadata().and_then(|m| m.original_text.as_deref()),
            Some("mützen")
        );
        assert_eq!(result[1].text, "haus");
        assert!(result[1].metadata().is_none());
        assert_eq!(result[2].text, "laufen"); // Stopped tokens are not processed
        assert_eq!(result[3].text, "kapitänen"); // Neither are keywords
    }

    #[test]
    fn test_stemmer_failure_keeps_token() {
        let filter = StemFilter::with_stemmer(Arc::new(SuffixStemmer));
        let tokens = vec![Token::new("xylophonen", 0), Token::new("mützen", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "xylophonen");
        assert_eq!(result[1].text, "mütz");
    }

    #[test]
    fn test_stem_result() {
        assert!(StemResult::new("mützen", "mütze").changed);
        assert!(!StemResult::new("haus", "haus").changed);
        assert!(!StemResult::unchanged("haus").changed);
        assert!(!StemResult::new("Haus", "haus").changed);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::default().name(), "stem");
    }
}

//! Keyword marker filter implementation.
//!
//! Marks tokens from a protected word list as keywords. Keyword tokens are
//! skipped by compound decomposition and stemming, so product names or
//! terms with an established spelling survive analysis verbatim.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that locks protected words against further rewriting.
#[derive(Clone, Debug, Default)]
pub struct KeywordMarkerFilter {
    keywords: Arc<HashSet<String>>,
}

impl KeywordMarkerFilter {
    /// Create a keyword marker from a list of protected words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeywordMarkerFilter {
            keywords: Arc::new(words.into_iter().map(|s| s.into()).collect()),
        }
    }

    /// Check if a word is protected.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }
}

impl Filter for KeywordMarkerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let keywords = Arc::clone(&self.keywords);
        Ok(Box::new(tokens.map(move |token| {
            if !token.is_stopped() && keywords.contains(&token.text) {
                token.mark_keyword()
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}

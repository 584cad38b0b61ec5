//! Primary word extraction filter.
//!
//! For every compound it can decompose, the filter emits the original token
//! followed by the compound's primary word, stacked at the same position:
//!
//! ```text
//! Input:  "kapitänsmützen"
//! Output: "kapitänsmützen" (pos_inc=1)
//!         "mützen"         (pos_inc=0, type=PrimaryWord)
//! ```
//!
//! A query for `mützen` then matches documents that only contain the
//! compound.

use std::sync::Arc;

use crate::analysis::compound::CompoundDecomposer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that adds the primary word of compound tokens.
#[derive(Clone, Debug)]
pub struct ExtractPrimaryWordFilter {
    decomposer: Arc<CompoundDecomposer>,
}

impl ExtractPrimaryWordFilter {
    pub fn new(decomposer: Arc<CompoundDecomposer>) -> Self {
        ExtractPrimaryWordFilter { decomposer }
    }

    /// The primary word token stacked on `token`, if it is a compound.
    fn primary_word(decomposer: &CompoundDecomposer, token: &Token) -> Option<Token> {
        if token.is_stopped() || token.is_keyword() || token.is_primary_word() {
            return None;
        }
        let split = decomposer.decompose(&token.text)?;
        Some(
            token
                .stacked(split.primary_word)
                .with_token_type(TokenType::PrimaryWord),
        )
    }
}

impl Filter for ExtractPrimaryWordFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let decomposer = Arc::clone(&self.decomposer);
        Ok(Box::new(tokens.flat_map(move |token| {
            let primary = Self::primary_word(&decomposer, &token);
            std::iter::once(token).chain(primary)
        })))
    }

    fn name(&self) -> &'static str {
        "extract_primary_word"
    }
}

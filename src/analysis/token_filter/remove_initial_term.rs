//! Remove initial term filter.
//!
//! Follows [`ExtractPrimaryWordFilter`](super::ExtractPrimaryWordFilter) to
//! index compounds by their primary word only: a token directly followed by
//! its stacked primary word is dropped, and the primary word takes over the
//! dropped token's position increment.
//!
//! ```text
//! Input:  "kapitänsmützen" (pos_inc=1), "mützen" (pos_inc=0, PrimaryWord)
//! Output: "mützen" (pos_inc=1, PrimaryWord)
//! ```

use std::iter::Peekable;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that replaces compounds by their primary word.
#[derive(Clone, Debug, Default)]
pub struct RemoveInitialTermFilter;

impl RemoveInitialTermFilter {
    pub fn new() -> Self {
        RemoveInitialTermFilter
    }
}

struct RemoveInitialTerm {
    tokens: Peekable<TokenStream>,
}

impl Iterator for RemoveInitialTerm {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;

        let followed_by_primary = !token.is_primary_word()
            && self
                .tokens
                .peek()
                .is_some_and(|next| next.is_primary_word() && next.position_increment == 0);

        if followed_by_primary && let Some(mut primary) = self.tokens.next() {
            primary.position_increment = token.position_increment;
            return Some(primary);
        }
        Some(token)
    }
}

impl Filter for RemoveInitialTermFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(RemoveInitialTerm {
            tokens: tokens.peekable(),
        }))
    }

    fn name(&self) -> &'static str {
        "remove_initial_term"
    }
}

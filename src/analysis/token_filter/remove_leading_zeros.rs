//! Remove leading zeros filter.
//!
//! Adds a copy of numeric tokens with their leading zeros removed, stacked on
//! the original, so `007` also matches `7`:
//!
//! ```text
//! Input:  "007"
//! Output: "007" (pos_inc=1), "7" (pos_inc=0, Num)
//! ```
//!
//! An all-zero token keeps a single `0`.

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that adds numeric tokens without leading zeros.
#[derive(Clone, Debug, Default)]
pub struct RemoveLeadingZerosFilter;

impl RemoveLeadingZerosFilter {
    pub fn new() -> Self {
        RemoveLeadingZerosFilter
    }

    /// Strip leading zeros, keeping at least one digit.
    pub fn strip(number: &str) -> &str {
        let stripped = number.trim_start_matches('0');
        if stripped.is_empty() && !number.is_empty() {
            &number[number.len() - 1..]
        } else {
            stripped
        }
    }

    fn stripped_token(token: &Token) -> Option<Token> {
        if token.is_stopped()
            || token.is_keyword()
            || !token.is_numeric()
            || !token.text.starts_with('0')
            || token.text.len() < 2
        {
            return None;
        }
        Some(
            token
                .stacked(Self::strip(&token.text))
                .with_token_type(TokenType::Num),
        )
    }
}

impl Filter for RemoveLeadingZerosFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.flat_map(|token| {
            let stripped = Self::stripped_token(&token);
            std::iter::once(token).chain(stripped)
        })))
    }

    fn name(&self) -> &'static str {
        "remove_leading_zeros"
    }
}

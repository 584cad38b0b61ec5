//! Unicode lowercasing. Dictionary lookups downstream assume lowercase input.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases the text of every token that is not stopped.
///
/// ```
/// use decompound::analysis::token::Token;
/// use decompound::analysis::token_filter::Filter;
/// use decompound::analysis::token_filter::lowercase::LowercaseFilter;
///
/// let tokens = vec![Token::new("Straße", 0), Token::new("TÜR", 1)];
/// let texts: Vec<String> = LowercaseFilter::new()
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(texts, vec!["straße", "tür"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            // Skip the allocation for text that is already lowercase.
            if !token.is_stopped() && token.text.chars().any(char::is_uppercase) {
                token.text = token.text.to_lowercase();
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

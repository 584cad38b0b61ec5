//! German stemming filter.
//!
//! Applies a [`CompoundStemmer`] to every token that is neither stopped nor
//! a keyword. Stemmed tokens remember their original text in the token
//! metadata.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stem::CompoundStemmer;
use crate::error::Result;

/// A filter that stems German words, compounds included.
#[derive(Clone, Debug)]
pub struct GermanStemFilter {
    stemmer: Arc<CompoundStemmer>,
}

impl GermanStemFilter {
    pub fn new(stemmer: Arc<CompoundStemmer>) -> Self {
        GermanStemFilter { stemmer }
    }
}

impl Filter for GermanStemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(tokens.map(move |token| {
            if token.is_stopped() || token.is_keyword() {
                return token;
            }
            let result = stemmer.stem_word(&token.text);
            if !result.changed {
                return token;
            }
            let original = token.text.clone();
            token.with_text(result.stem).with_original_text(original)
        })))
    }

    fn name(&self) -> &'static str {
        "german_stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compound::fixtures;
    use crate::analysis::hunspell::HunspellDictionary;
    use crate::analysis::token::{Token, TokenType};
    use crate::analysis::token_filter::stem::HunspellStemmer;

    fn filter() -> GermanStemFilter {
        let dictionary = HunspellDictionary::parse(
            "SET UTF-8\nSFX N Y 1\nSFX N 0 n e\n",
            "2\nmütze/N\nhaus\n",
        )
        .unwrap();
        let stemmer = CompoundStemmer::new(
            Arc::new(HunspellStemmer::new(Arc::new(dictionary))),
            fixtures::decomposer(),
        );
        GermanStemFilter::new(Arc::new(stemmer))
    }

    #[test]
    fn test_german_stem() {
        let tokens = vec![
            Token::new("dampfschifffahrtskapitänsmützen", 0),
            Token::new("mützen", 0)
                .with_position_increment(0)
                .with_token_type(TokenType::PrimaryWord),
            Token::new("haus", 1),
        ];

        let result: Vec<Token> = filter()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "dampfschifffahrtskapitänsmütze");
        assert_eq!(
            result[0].metadata().and_then(|m| m.original_text.as_deref()),
            Some("dampfschifffahrtskapitänsmützen")
        );
        assert_eq!(result[1].text, "mütze");
        assert!(result[1].is_primary_word());
        assert_eq!(result[2].text, "haus");
    }

    #[test]
    fn test_keywords_are_not_stemmed() {
        let tokens = vec![Token::new("mützen", 0).mark_keyword()];

        let result: Vec<Token> = filter()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "mützen");
    }
}

//! Splits on Unicode whitespace and tags each word with a [`TokenType`].

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Digits only is `Num`, letters and digits `Alphanum`, ASCII symbols
    /// `Punctuation`.
    pub(crate) fn detect_token_type(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.bytes().all(|b| b.is_ascii_digit()) {
            return TokenType::Num;
        }

        if word.chars().all(char::is_alphanumeric) {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        let push = |from: usize, to: usize, tokens: &mut Vec<Token>| {
            let word = &text[from..to];
            let position = tokens.len();
            tokens.push(
                Token::with_offsets(word, position, from, to)
                    .with_token_type(Self::detect_token_type(word)),
            );
        };

        for (idx, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(from)) => {
                    push(from, idx, &mut tokens);
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }
        if let Some(from) = start {
            push(from, text.len(), &mut tokens);
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_whitespace_runs() {
        let tokens: Vec<Token> = WhitespaceTokenizer::new()
            .tokenize(" Haus\u{a0}\ttür\nKind ")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Haus", "tür", "Kind"]);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_offsets_for_repeated_words() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Tür  Tür").unwrap().collect();

        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 4); // 'ü' is two bytes
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 10);
    }

    #[test]
    fn test_token_types() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Mütze 0815 12-34 ...").unwrap().collect();

        assert_eq!(tokens[0].token_type(), Some(TokenType::Alphanum));
        assert_eq!(tokens[1].token_type(), Some(TokenType::Num));
        assert_eq!(tokens[2].token_type(), Some(TokenType::Other));
        assert_eq!(tokens[3].token_type(), Some(TokenType::Punctuation));
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("  \n ").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}

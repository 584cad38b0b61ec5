//! The token model shared by tokenizers, filters and analyzers.
//!
//! A [`Token`] carries its surface text, its slot in the stream and the byte
//! span it came from. Filters never renumber the stream: a filter that emits
//! an extra form (a primary word, a joined number, a number without leading
//! zeros) stacks it on the slot of the token it was derived from.
//!
//! ```text
//! "kapitänsmützen"
//!
//!   slot 0  "kapitänsmützen"   inc=1
//!   slot 0  "mützen"           inc=0  PrimaryWord
//! ```
//!
//! ```
//! use decompound::analysis::token::Token;
//!
//! let token = Token::with_offsets("haus", 1, 6, 10);
//! assert_eq!(token.end_offset - token.start_offset, 4);
//! assert!(!token.is_keyword());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One analyzed unit of text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,

    /// Slot in the stream, 0-based. Stacked tokens share the slot of their source.
    pub position: usize,

    /// Byte span in the analyzed text.
    pub start_offset: usize,
    pub end_offset: usize,

    /// Set by a filter that wants the token dropped or skipped downstream.
    pub stopped: bool,

    /// Keyword tokens pass through decomposition and stemming untouched.
    pub keyword: bool,

    /// Distance to the previous token. 0 for stacked forms, >1 after removed tokens.
    pub position_increment: usize,

    pub metadata: Option<TokenMetadata>,
}

/// What kind of text a token holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters, optionally mixed with digits
    Alphanum,
    /// ASCII digits only
    Num,
    /// Head constituent extracted from a compound word
    PrimaryWord,
    Punctuation,
    Other,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Surface form before a stemmer rewrote the text.
    pub original_text: Option<String>,
    pub token_type: Option<TokenType>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
            keyword: false,
            position_increment: 1,
            metadata: None,
        }
    }

    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// A fresh token on the same slot and span as `self`, with increment 0.
    ///
    /// Flags and metadata are not inherited.
    pub fn stacked<S: Into<String>>(&self, text: S) -> Self {
        Token {
            position_increment: 0,
            ..Token::with_offsets(text, self.position, self.start_offset, self.end_offset)
        }
    }

    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn mark_keyword(mut self) -> Self {
        self.keyword = true;
        self
    }

    pub fn is_keyword(&self) -> bool {
        self.keyword
    }

    /// True for non-empty text made only of ASCII digits.
    pub fn is_numeric(&self) -> bool {
        !self.text.is_empty() && self.text.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn metadata(&self) -> Option<&TokenMetadata> {
        self.metadata.as_ref()
    }

    /// Record the form this token had before its text was rewritten.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        self.metadata.get_or_insert_with(TokenMetadata::default).original_text =
            Some(original.into());
        self
    }

    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.metadata.get_or_insert_with(TokenMetadata::default).token_type = Some(token_type);
        self
    }

    pub fn token_type(&self) -> Option<TokenType> {
        self.metadata.as_ref().and_then(|m| m.token_type)
    }

    pub fn is_primary_word(&self) -> bool {
        self.token_type() == Some(TokenType::PrimaryWord)
    }

    /// Copy of this token carrying different text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Copy of this token moved to another slot.
    pub fn with_position(&self, position: usize) -> Self {
        Token {
            position,
            ..self.clone()
        }
    }

    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lazily produced tokens flowing between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_defaults() {
        let token = Token::new("hallo", 2);

        assert_eq!(token.position, 2);
        assert_eq!(token.position_increment, 1);
        assert_eq!((token.start_offset, token.end_offset), (0, 0));
        assert!(!token.is_stopped());
        assert!(!token.is_keyword());
        assert!(token.metadata().is_none());
    }

    #[test]
    fn test_flags_and_metadata() {
        let token = Token::new("kinder", 0)
            .stop()
            .mark_keyword()
            .with_original_text("Kinder")
            .with_token_type(TokenType::Alphanum);

        assert!(token.is_stopped());
        assert!(token.is_keyword());
        assert_eq!(
            token.metadata().and_then(|m| m.original_text.as_deref()),
            Some("Kinder")
        );
        assert_eq!(token.token_type(), Some(TokenType::Alphanum));
    }

    #[test]
    fn test_is_numeric() {
        assert!(Token::new("0042", 0).is_numeric());
        assert!(!Token::new("42a", 0).is_numeric());
        assert!(!Token::new("", 0).is_numeric());
        // Arabic-Indic digits
        assert!(!Token::new("٤٢", 0).is_numeric());
    }

    #[test]
    fn test_stacked_token() {
        let base = Token::with_offsets("kapitänsmützen", 3, 10, 25)
            .mark_keyword()
            .with_position_increment(2);
        let stacked = base.stacked("mützen").with_token_type(TokenType::PrimaryWord);

        assert_eq!(stacked.position, 3);
        assert_eq!(stacked.position_increment, 0);
        assert_eq!((stacked.start_offset, stacked.end_offset), (10, 25));
        assert!(!stacked.is_keyword());
        assert!(stacked.is_primary_word());
    }

    #[test]
    fn test_with_text_keeps_span() {
        let token = Token::with_offsets("Häuser", 4, 7, 14).with_text("haus");

        assert_eq!(token.to_string(), "haus");
        assert_eq!(token.position, 4);
        assert_eq!(token.end_offset, 14);
    }
}

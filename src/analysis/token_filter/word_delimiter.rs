//! Word delimiter filter implementation.
//!
//! Splits tokens into sub-words at characters that are not letters or
//! digits, and optionally where letters and digits meet or where a lower
//! case letter is followed by an upper case one:
//!
//! ```text
//! "Wi-Fi"      → "Wi", "Fi"
//! "12-34/56"   → "12", "34", "56"
//! "MP3Player"  → "MP", "3", "Player"
//! ```
//!
//! Parts are emitted at consecutive positions; tokens that come after a split
//! token are shifted accordingly.

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// A filter that splits tokens on intra-word delimiters.
#[derive(Clone, Debug)]
pub struct WordDelimiterFilter {
    split_on_numerics: bool,
    split_on_case_change: bool,
    preserve_original: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Delimiter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_numeric() {
            CharClass::Digit
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_alphabetic() {
            CharClass::Lower
        } else {
            CharClass::Delimiter
        }
    }
}

impl WordDelimiterFilter {
    /// Create a new word delimiter filter that splits on delimiters and
    /// letter/digit transitions.
    pub fn new() -> Self {
        WordDelimiterFilter {
            split_on_numerics: true,
            split_on_case_change: false,
            preserve_original: false,
        }
    }

    /// Set whether letter/digit transitions split a word.
    pub fn split_on_numerics(mut self, split: bool) -> Self {
        self.split_on_numerics = split;
        self
    }

    /// Set whether a lower to upper case transition splits a word.
    pub fn split_on_case_change(mut self, split: bool) -> Self {
        self.split_on_case_change = split;
        self
    }

    /// Set whether the unsplit token is emitted in front of its parts.
    pub fn preserve_original(mut self, preserve: bool) -> Self {
        self.preserve_original = preserve;
        self
    }

    /// Split a word into `(byte_start, byte_end)` ranges of its parts.
    pub fn split(&self, word: &str) -> Vec<(usize, usize)> {
        let mut parts = Vec::new();
        let mut start: Option<usize> = None;
        let mut previous = CharClass::Delimiter;

        for (idx, c) in word.char_indices() {
            let class = CharClass::of(c);

            if class == CharClass::Delimiter {
                if let Some(from) = start.take() {
                    parts.push((from, idx));
                }
            } else if let Some(from) = start {
                if self.is_boundary(previous, class) {
                    parts.push((from, idx));
                    start = Some(idx);
                }
            } else {
                start = Some(idx);
            }

            previous = class;
        }

        if let Some(from) = start {
            parts.push((from, word.len()));
        }

        parts
    }

    fn is_boundary(&self, previous: CharClass, current: CharClass) -> bool {
        let previous_digit = previous == CharClass::Digit;
        let current_digit = current == CharClass::Digit;

        (self.split_on_numerics && previous_digit != current_digit)
            || (self.split_on_case_change
                && previous == CharClass::Lower
                && current == CharClass::Upper)
    }
}

impl Default for WordDelimiterFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Position bookkeeping carried from one token to the next.
#[derive(Default)]
struct SplitState {
    /// Extra positions introduced by earlier splits.
    shift: usize,
    /// Increments of dropped delimiter-only tokens.
    carried: usize,
}

impl WordDelimiterFilter {
    fn split_token(&self, mut token: Token, state: &mut SplitState) -> Vec<Token> {
        token.position += state.shift;

        if token.is_stopped() || token.is_keyword() {
            token.position_increment += std::mem::take(&mut state.carried);
            return vec![token];
        }

        let parts = self.split(&token.text);

        if parts.is_empty() {
            state.carried += token.position_increment;
            return Vec::new();
        }

        if parts.len() == 1 && parts[0] == (0, token.text.len()) {
            token.position_increment += std::mem::take(&mut state.carried);
            return vec![token];
        }

        // Offsets can only be derived when the text still spans its offsets.
        let exact_offsets =
            token.end_offset.checked_sub(token.start_offset) == Some(token.text.len());

        let mut output = Vec::with_capacity(parts.len() + 1);
        let mut first_increment = token.position_increment + std::mem::take(&mut state.carried);

        if self.preserve_original {
            let mut original = token.clone();
            original.position_increment = first_increment;
            output.push(original);
            first_increment = 0;
        }

        for (i, &(from, to)) in parts.iter().enumerate() {
            let text = &token.text[from..to];
            let mut part = token
                .with_text(text)
                .with_position(token.position + i)
                .with_position_increment(if i == 0 { first_increment } else { 1 })
                .with_token_type(WhitespaceTokenizer::detect_token_type(text));
            if exact_offsets {
                part.start_offset = token.start_offset + from;
                part.end_offset = token.start_offset + to;
            }
            output.push(part);
        }

        state.shift += parts.len() - 1;
        output
    }
}

impl Filter for WordDelimiterFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filter = self.clone();
        let mut state = SplitState::default();

        Ok(Box::new(
            tokens.flat_map(move |token| filter.split_token(token, &mut state)),
        ))
    }

    fn name(&self) -> &'static str {
        "word_delimiter"
    }
}

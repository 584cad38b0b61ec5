//! German normalization filter implementation.
//!
//! Folds the spelling variants German text is commonly written in so that
//! `Mütze`, `Muetze` and `Mutze` meet in the index:
//!
//! - `ä`, `ö`, `ü` become `a`, `o`, `u`
//! - `ß` becomes `ss`
//! - the transcriptions `ae`, `oe`, `ue` become `a`, `o`, `u`, except for
//!   `ue` after `q` (`Quelle`) and after another vowel (`treue`)
//!
//! Run it after stemming: the stemmer's dictionaries use real umlauts.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that folds umlauts, `ß` and their transcriptions.
#[derive(Clone, Debug, Default)]
pub struct GermanNormalizationFilter;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// Ordinary character
    Other,
    /// After `a` or `o` that may start a transcribed umlaut
    Umlaut,
    /// After a `u` that may start a transcribed umlaut
    U,
    /// After a vowel-ish character that blocks transcription folding
    Blocked,
}

impl GermanNormalizationFilter {
    /// Create a new German normalization filter.
    pub fn new() -> Self {
        GermanNormalizationFilter
    }

    /// Normalize a single (lowercased) word.
    pub fn normalize(word: &str) -> String {
        let mut output = String::with_capacity(word.len());
        let mut state = State::Other;

        for c in word.chars() {
            match c {
                'a' | 'o' => {
                    output.push(c);
                    state = State::Umlaut;
                }
                'u' => {
                    output.push(c);
                    state = if state == State::Other {
                        State::U
                    } else {
                        State::Blocked
                    };
                }
                'e' => {
                    if state != State::Umlaut && state != State::U {
                        output.push(c);
                    }
                    state = State::Blocked;
                }
                'i' | 'q' | 'y' => {
                    output.push(c);
                    state = State::Blocked;
                }
                'ä' => {
                    output.push('a');
                    state = State::Blocked;
                }
                'ö' => {
                    output.push('o');
                    state = State::Blocked;
                }
                'ü' => {
                    output.push('u');
                    state = State::Blocked;
                }
                'ß' => {
                    output.push_str("ss");
                    state = State::Other;
                }
                _ => {
                    output.push(c);
                    state = State::Other;
                }
            }
        }

        output
    }
}

impl Filter for GermanNormalizationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            if !token.is_stopped() && !token.is_keyword() {
                token.text = Self::normalize(&token.text);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "german_normalization"
    }
}

//! Token filters: everything between the tokenizer and the emitted stream.
//!
//! Filters receive the token stream produced by a tokenizer (or a previous
//! filter) and return a new stream. Filters that add tokens stack them on an
//! existing position with a position increment of zero.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words (German list by default)
//! - [`keyword_marker::KeywordMarkerFilter`] - Locks protected words
//! - [`word_delimiter::WordDelimiterFilter`] - Splits on punctuation and letter/digit changes
//! - [`extract_primary_word::ExtractPrimaryWordFilter`] - Adds the head of compound words
//! - [`remove_initial_term::RemoveInitialTermFilter`] - Drops compounds in favour of their head
//! - [`stem::StemFilter`] - Reduces words with any [`stem::Stemmer`]
//! - [`german_stem::GermanStemFilter`] - Compound-aware German stemming
//! - [`german_normalization::GermanNormalizationFilter`] - Folds umlauts and `ß`
//! - [`close_gap_between_numbers::CloseGapBetweenNumbersFilter`] - Joins adjacent numbers
//! - [`remove_leading_zeros::RemoveLeadingZerosFilter`] - Adds numbers without leading zeros
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stop → Primary Word → German Stem → Numbers → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// One stage of the token chain.
///
/// `filter` wraps the incoming stream and should stay lazy: per-call state
/// lives in the returned iterator, never in `self`, since a single filter
/// serves every thread analyzing with the same analyzer.
pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Short identifier shown in `Debug` output of analyzers.
    fn name(&self) -> &'static str;
}

pub mod close_gap_between_numbers;
pub mod extract_primary_word;
pub mod german_normalization;
pub mod german_stem;
pub mod keyword_marker;
pub mod lowercase;
pub mod remove_initial_term;
pub mod remove_leading_zeros;
pub mod stem;
pub mod stop;
pub mod word_delimiter;

pub use close_gap_between_numbers::CloseGapBetweenNumbersFilter;
pub use extract_primary_word::ExtractPrimaryWordFilter;
pub use german_normalization::GermanNormalizationFilter;
pub use german_stem::GermanStemFilter;
pub use keyword_marker::KeywordMarkerFilter;
pub use lowercase::LowercaseFilter;
pub use remove_initial_term::RemoveInitialTermFilter;
pub use remove_leading_zeros::RemoveLeadingZerosFilter;
pub use stem::{
    CompoundStemmer, HunspellStemmer, IdentityStemmer, StemFilter, StemResult, Stemmer,
};
pub use stop::StopFilter;
pub use word_delimiter::WordDelimiterFilter;

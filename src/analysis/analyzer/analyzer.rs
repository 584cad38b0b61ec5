//! The [`Analyzer`] trait: text in, tokens out.
//!
//! Implementations in this crate are [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer),
//! which chains arbitrary stages, and
//! [`GermanAnalyzer`](super::language::german::GermanAnalyzer), which wires
//! the compound-aware German chain from a configuration.
//!
//! ```
//! use decompound::analysis::analyzer::Analyzer;
//! use decompound::analysis::token::{Token, TokenStream};
//! use decompound::error::Result;
//!
//! /// Emits the whole input as a single token.
//! struct WholeText;
//!
//! impl Analyzer for WholeText {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let token = Token::with_offsets(text, 0, 0, text.len());
//!         Ok(Box::new(std::iter::once(token)))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "whole_text"
//!     }
//! }
//!
//! let tokens: Vec<_> = WholeText.analyze("Haus Tür").unwrap().collect();
//! assert_eq!(tokens[0].end_offset, 9);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Turns text into a token stream.
///
/// One instance may serve many threads at once, hence `Send + Sync`.
pub trait Analyzer: Send + Sync {
    /// Fails only when the pipeline cannot be run at all. Problems with a
    /// single token are recovered inside the filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}

//! Splitting text into the initial token stream.

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Produces tokens with positions counted from 0 and byte offsets into `text`.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}

//! # Decompound
//!
//! A text analysis library for German search, built around compound word
//! decomposition.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Liang/TeX hyphenation trees for compound break points
//! - Dictionary-validated compound splitting with primary-word extraction
//! - Hunspell affix stemming with a compound-aware fallback
//! - Numeric token gap-closing and leading-zero normalization
//! - Pluggable char filter / tokenizer / token filter pipeline

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, GermanAnalyzer, GermanAnalyzerConfig};
    pub use crate::analysis::token::{Token, TokenStream, TokenType};
    pub use crate::error::{DecompoundError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Analyzer implementations that combine char filters, tokenizers and token
//! filters.

pub mod analyzer;
pub mod language;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use language::german::{GermanAnalyzer, GermanAnalyzerConfig, GermanResources};
pub use pipeline::PipelineAnalyzer;

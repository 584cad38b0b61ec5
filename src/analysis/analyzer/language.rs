//! Language-specific analyzers.
//!
//! - [`german`] - German analysis with compound decomposition and Hunspell stemming

pub mod german;

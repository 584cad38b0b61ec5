//! Text analysis module for Decompound.
//!
//! This module provides the analysis pipeline (char filters, tokenizers,
//! token filters, analyzers) together with the German compound and Hunspell
//! machinery the compound-aware token filters are built on.

pub mod analyzer;
pub mod char_filter;
pub mod compound;
pub mod hunspell;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

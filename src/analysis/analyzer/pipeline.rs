//! An analyzer assembled from stages: char filters rewrite the raw text, the
//! tokenizer splits it, and token filters run over the stream in the order
//! they were added. Offsets on the emitted tokens always refer to the text
//! passed to [`Analyzer::analyze`], whatever the char filters removed.
//!
//! ```
//! use decompound::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use decompound::analysis::tokenizer::WhitespaceTokenizer;
//! use decompound::analysis::token_filter::lowercase::LowercaseFilter;
//! use decompound::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["der", "und"])))
//!     .with_name("hof");
//!
//! let texts: Vec<String> = analyzer
//!     .analyze("Haus UND der Hof")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(texts, vec!["haus", "hof"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation, restore_offset};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    name: String,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            char_filters: Vec::new(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Append a token filter; it sees the output of every filter added before it.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Run the char filters in order, keeping the edit list of each one.
    fn rewrite(&self, text: &str) -> (String, Vec<Vec<Transformation>>) {
        let mut current = text.to_string();
        let mut edit_lists = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (rewritten, edits) = char_filter.filter(&current);
            current = rewritten;
            if !edits.is_empty() {
                edit_lists.push(edits);
            }
        }

        (current, edit_lists)
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let (rewritten, edit_lists) = self.rewrite(text);

        let tokens = self
            .filters
            .iter()
            .try_fold(self.tokenizer.tokenize(&rewritten)?, |tokens, filter| {
                filter.filter(tokens)
            })?;

        if edit_lists.is_empty() {
            return Ok(tokens);
        }

        // Undo the char filters last to first.
        Ok(Box::new(tokens.map(move |mut token| {
            for edits in edit_lists.iter().rev() {
                token.start_offset = restore_offset(token.start_offset, edits);
                token.end_offset = restore_offset(token.end_offset, edits);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let char_filters: Vec<_> = self.char_filters.iter().map(|c| c.name()).collect();
        let filters: Vec<_> = self.filters.iter().map(|t| t.name()).collect();

        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("char_filters", &char_filters)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}

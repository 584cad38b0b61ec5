//! Text rewriting that runs before tokenization.
//!
//! A char filter returns the rewritten text together with the list of edits it
//! made, so that offsets computed on the rewritten text can be mapped back onto
//! the caller's input with [`restore_offset`].
//!
//! ```
//! use decompound::analysis::char_filter::{CharFilter, restore_offset};
//! use decompound::analysis::char_filter::html_strip::HtmlStripCharFilter;
//!
//! let filter = HtmlStripCharFilter::new().unwrap();
//! let (text, edits) = filter.filter("<b>Haus</b> &amp; Hof");
//! assert_eq!(text, "Haus & Hof");
//! // "Hof" starts at byte 7 after stripping, byte 18 in the input.
//! assert_eq!(restore_offset(7, &edits), 18);
//! ```

pub mod html_strip;

/// One edit: bytes `original_start..original_end` of the input became
/// `new_start..new_end` of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }

    fn original_len(&self) -> usize {
        self.original_end - self.original_start
    }

    fn new_len(&self) -> usize {
        self.new_end - self.new_start
    }
}

/// Rewrites text ahead of the tokenizer.
pub trait CharFilter: Send + Sync {
    /// Returns the rewritten text and its edits, sorted by position.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    fn name(&self) -> &'static str;
}

/// Map a byte offset in filtered text back to the text the filter received.
///
/// `edits` must be sorted by position. An offset that falls inside a
/// replacement is scaled proportionally across the original span.
pub fn restore_offset(offset: usize, edits: &[Transformation]) -> usize {
    let mut grown: usize = 0;
    let mut shrunk: usize = 0;

    for edit in edits {
        if offset < edit.new_start {
            break;
        }
        if offset < edit.new_end {
            let scaled = (offset - edit.new_start) * edit.original_len() / edit.new_len();
            return edit.original_start + scaled;
        }
        if edit.original_len() >= edit.new_len() {
            grown += edit.original_len() - edit.new_len();
        } else {
            shrunk += edit.new_len() - edit.original_len();
        }
    }

    (offset + grown).saturating_sub(shrunk)
}

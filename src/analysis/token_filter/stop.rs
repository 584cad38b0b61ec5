//! Stop word removal.
//!
//! A dropped token leaves a gap: its position increment is added to the next
//! token that survives, so phrase distances over the remaining tokens do not
//! change.
//!
//! ```
//! use decompound::analysis::token::Token;
//! use decompound::analysis::token_filter::Filter;
//! use decompound::analysis::token_filter::stop::StopFilter;
//!
//! let tokens = vec![
//!     Token::new("der", 0),
//!     Token::new("kapitän", 1),
//!     Token::new("und", 2),
//!     Token::new("die", 3),
//!     Token::new("mütze", 4),
//! ];
//! let kept: Vec<_> = StopFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| (t.text, t.position_increment))
//!     .collect();
//!
//! assert_eq!(kept, vec![("kapitän".to_string(), 2), ("mütze".to_string(), 3)]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Function words dropped by [`StopFilter::new`].
const GERMAN_STOP_WORDS: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
    "andere", "anderem", "anderen", "anderer", "anderes", "auch", "auf", "aus", "bei", "bin",
    "bis", "bist", "da", "damit", "dann", "das", "dass", "dasselbe", "dazu", "dein", "deine",
    "deinem", "deinen", "deiner", "dem", "den", "denn", "der", "des", "dich", "die", "dies",
    "diese", "dieselbe", "diesem", "diesen", "dieser", "dieses", "dir", "doch", "dort", "du",
    "durch", "ein", "eine", "einem", "einen", "einer", "eines", "einig", "einige", "er", "es",
    "etwas", "euch", "euer", "für", "gegen", "gewesen", "hab", "habe", "haben", "hat", "hatte",
    "hatten", "hier", "hin", "hinter", "ich", "ihm", "ihn", "ihnen", "ihr", "ihre", "im", "in",
    "indem", "ins", "ist", "jede", "jedem", "jeden", "jeder", "jedes", "jene", "jetzt", "kann",
    "kein", "keine", "können", "man", "manche", "mein", "meine", "mich", "mir", "mit", "muss",
    "nach", "nicht", "nichts", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr", "sein",
    "seine", "sich", "sie", "sind", "so", "solche", "soll", "sondern", "über", "um", "und",
    "uns", "unser", "unter", "viel", "vom", "von", "vor", "war", "waren", "was", "weil",
    "welche", "wenn", "werden", "wie", "wieder", "will", "wir", "wird", "wo", "wollen",
    "würde", "zu", "zum", "zur", "zwar", "zwischen",
];

static GERMAN_STOP_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(GERMAN_STOP_WORDS.iter().map(|w| w.to_string()).collect())
});

/// Drops, or only marks, tokens whose text is in the stop set.
///
/// Matching is exact, so the filter belongs after lowercasing. Keyword tokens
/// are never dropped.
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<HashSet<String>>,
    remove_stopped: bool,
}

impl StopFilter {
    /// The built-in German list.
    ///
    /// ```
    /// use decompound::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("und"));
    /// assert!(!filter.is_stop_word("haus"));
    /// ```
    pub fn new() -> Self {
        StopFilter {
            words: Arc::clone(&*GERMAN_STOP_SET),
            remove_stopped: true,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
            remove_stopped: true,
        }
    }

    /// With `false`, stop words stay in the stream flagged as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = Arc::clone(&self.words);
        let remove_stopped = self.remove_stopped;
        let mut gap = 0;

        Ok(Box::new(tokens.filter_map(move |mut token| {
            let is_stop = !token.is_stopped() && !token.is_keyword() && words.contains(&token.text);

            if !is_stop {
                token.position_increment += gap;
                gap = 0;
                return Some(token);
            }
            if remove_stopped {
                gap += token.position_increment;
                return None;
            }
            Some(token.stop())
        })))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

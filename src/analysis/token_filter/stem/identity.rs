use crate::analysis::token_filter::stem::Stemmer;
use crate::error::Result;

/// Leaves every word as it is. The default [`StemFilter`](super::StemFilter)
/// uses it.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        Ok(word.to_owned())
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stem::StemFilter;

    #[test]
    fn test_word_is_returned_unchanged() {
        let stemmer = IdentityStemmer::new();

        assert_eq!(stemmer.stem("Mützen").unwrap(), "Mützen");
        assert!(!StemFilter::stem_or_keep(&stemmer, "häuser").changed);
    }
}

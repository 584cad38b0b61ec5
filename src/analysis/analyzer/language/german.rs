//! German analyzer.
//!
//! Assembles the compound-aware German pipeline:
//!
//! ```text
//! html strip → whitespace → word delimiter → lowercase → stop
//!   → keyword marker → extract primary word → [remove initial term]
//!   → German stem → German normalization → close number gaps
//!   → remove leading zeros
//! ```
//!
//! The hyphenation tree, word dictionary and Hunspell tables are loaded once
//! into [`GermanResources`] and can back any number of analyzers.

use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::html_strip::HtmlStripCharFilter;
use crate::analysis::compound::{
    CompoundDecomposer, DecomposerConfig, HyphenationTree, WordDictionary,
};
use crate::analysis::hunspell::HunspellDictionary;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::{CompoundStemmer, HunspellStemmer};
use crate::analysis::token_filter::{
    CloseGapBetweenNumbersFilter, ExtractPrimaryWordFilter, GermanNormalizationFilter,
    GermanStemFilter, KeywordMarkerFilter, LowercaseFilter, RemoveInitialTermFilter,
    RemoveLeadingZerosFilter, StopFilter, WordDelimiterFilter,
};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::{DecompoundError, Result};

/// Configuration of a [`GermanAnalyzer`], usually read from JSON.
///
/// ```
/// use decompound::analysis::analyzer::GermanAnalyzerConfig;
///
/// let config: GermanAnalyzerConfig = serde_json::from_str(r#"{
///     "hyphenation_patterns": "de.tex",
///     "compound_dictionary": "words.txt",
///     "hunspell_affix": "de.aff",
///     "hunspell_dictionary": "de.dic",
///     "keep_compound_original": false
/// }"#).unwrap();
///
/// assert!(!config.keep_compound_original);
/// assert!(config.strip_html);
/// assert_eq!(config.decomposer.min_word_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GermanAnalyzerConfig {
    /// TeX hyphenation pattern file.
    pub hyphenation_patterns: PathBuf,
    /// Word list validating compound constituents.
    pub compound_dictionary: PathBuf,
    /// Hunspell `.aff` file.
    pub hunspell_affix: PathBuf,
    /// Hunspell `.dic` file.
    pub hunspell_dictionary: PathBuf,
    pub decomposer: DecomposerConfig,
    /// Minimum chars before the first and after the last hyphenation break.
    pub hyphenation_margins: (usize, usize),
    /// Stop words; `None` uses the built-in German list.
    pub stop_words: Option<Vec<String>>,
    /// Words that are never decomposed or stemmed.
    pub protected_words: Vec<String>,
    pub strip_html: bool,
    pub split_on_numerics: bool,
    /// Keep compounds next to their primary word. When false, compounds are
    /// replaced by their primary word.
    pub keep_compound_original: bool,
    pub normalize_umlauts: bool,
    pub close_number_gaps: bool,
    pub strip_leading_zeros: bool,
}

impl Default for GermanAnalyzerConfig {
    fn default() -> Self {
        GermanAnalyzerConfig {
            hyphenation_patterns: PathBuf::new(),
            compound_dictionary: PathBuf::new(),
            hunspell_affix: PathBuf::new(),
            hunspell_dictionary: PathBuf::new(),
            decomposer: DecomposerConfig::default(),
            hyphenation_margins: (1, 1),
            stop_words: None,
            protected_words: Vec::new(),
            strip_html: true,
            split_on_numerics: true,
            keep_compound_original: true,
            normalize_umlauts: true,
            close_number_gaps: true,
            strip_leading_zeros: true,
        }
    }
}

impl GermanAnalyzerConfig {
    /// Read a JSON configuration file. Relative resource paths are resolved
    /// against the directory of the configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DecompoundError::resource(format!(
                "Failed to read analyzer configuration '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut config: GermanAnalyzerConfig = serde_json::from_str(&content)?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Make relative resource paths relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for resource in [
            &mut self.hyphenation_patterns,
            &mut self.compound_dictionary,
            &mut self.hunspell_affix,
            &mut self.hunspell_dictionary,
        ] {
            if resource.is_relative() && !resource.as_os_str().is_empty() {
                *resource = base.join(&*resource);
            }
        }
    }

    /// Check that every resource path is set and the decomposer bounds are
    /// consistent.
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("hyphenation_patterns", &self.hyphenation_patterns),
            ("compound_dictionary", &self.compound_dictionary),
            ("hunspell_affix", &self.hunspell_affix),
            ("hunspell_dictionary", &self.hunspell_dictionary),
        ] {
            if path.as_os_str().is_empty() {
                return Err(DecompoundError::invalid_config(format!(
                    "missing resource path '{name}'"
                )));
            }
        }
        self.decomposer.validate()
    }
}

/// Shared, immutable resources of the German analyzer.
#[derive(Debug, Clone)]
pub struct GermanResources {
    hyphenation: Arc<HyphenationTree>,
    dictionary: Arc<WordDictionary>,
    hunspell: Arc<HunspellDictionary>,
}

impl GermanResources {
    pub fn new(
        hyphenation: Arc<HyphenationTree>,
        dictionary: Arc<WordDictionary>,
        hunspell: Arc<HunspellDictionary>,
    ) -> Self {
        GermanResources {
            hyphenation,
            dictionary,
            hunspell,
        }
    }

    /// Load all resource files named in the configuration.
    pub fn load(config: &GermanAnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let (left, right) = config.hyphenation_margins;
        let hyphenation =
            HyphenationTree::load(&config.hyphenation_patterns)?.with_margins(left, right);
        let dictionary = WordDictionary::load(&config.compound_dictionary)?;
        let hunspell =
            HunspellDictionary::load(&config.hunspell_affix, &config.hunspell_dictionary)?;

        debug!(
            "German resources ready: {} patterns, {} words, {} Hunspell entries",
            hyphenation.pattern_count(),
            dictionary.len(),
            hunspell.len()
        );

        Ok(Self::new(
            Arc::new(hyphenation),
            Arc::new(dictionary),
            Arc::new(hunspell),
        ))
    }

    pub fn hyphenation(&self) -> &Arc<HyphenationTree> {
        &self.hyphenation
    }

    pub fn dictionary(&self) -> &Arc<WordDictionary> {
        &self.dictionary
    }

    pub fn hunspell(&self) -> &Arc<HunspellDictionary> {
        &self.hunspell
    }
}

/// Compound-aware analyzer for German text.
pub struct GermanAnalyzer {
    inner: PipelineAnalyzer,
    decomposer: Arc<CompoundDecomposer>,
    stemmer: Arc<CompoundStemmer>,
}

impl GermanAnalyzer {
    /// Load the resources named in the configuration and build the analyzer.
    pub fn from_config(config: &GermanAnalyzerConfig) -> Result<Self> {
        let resources = GermanResources::load(config)?;
        Self::with_resources(&resources, config)
    }

    /// Build an analyzer on already loaded resources. Resource paths in the
    /// configuration are ignored.
    pub fn with_resources(
        resources: &GermanResources,
        config: &GermanAnalyzerConfig,
    ) -> Result<Self> {
        let decomposer = Arc::new(CompoundDecomposer::new(
            Arc::clone(&resources.hyphenation),
            Arc::clone(&resources.dictionary),
            config.decomposer.clone(),
        )?);
        let stemmer = Arc::new(CompoundStemmer::new(
            Arc::new(HunspellStemmer::new(Arc::clone(&resources.hunspell))),
            Arc::clone(&decomposer),
        ));

        let stop = match &config.stop_words {
            Some(words) => StopFilter::from_words(words.iter().map(|w| w.to_lowercase())),
            None => StopFilter::new(),
        };

        let mut analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        if config.strip_html {
            analyzer = analyzer.add_char_filter(Arc::new(HtmlStripCharFilter::new()?));
        }
        analyzer = analyzer
            .add_filter(Arc::new(
                WordDelimiterFilter::new().split_on_numerics(config.split_on_numerics),
            ))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop))
            .add_filter(Arc::new(KeywordMarkerFilter::from_words(
                config.protected_words.iter().map(|w| w.to_lowercase()),
            )))
            .add_filter(Arc::new(ExtractPrimaryWordFilter::new(Arc::clone(
                &decomposer,
            ))));
        if !config.keep_compound_original {
            analyzer = analyzer.add_filter(Arc::new(RemoveInitialTermFilter::new()));
        }
        analyzer = analyzer.add_filter(Arc::new(GermanStemFilter::new(Arc::clone(&stemmer))));
        if config.normalize_umlauts {
            analyzer = analyzer.add_filter(Arc::new(GermanNormalizationFilter::new()));
        }
        if config.close_number_gaps {
            analyzer = analyzer.add_filter(Arc::new(CloseGapBetweenNumbersFilter::new()));
        }
        if config.strip_leading_zeros {
            analyzer = analyzer.add_filter(Arc::new(RemoveLeadingZerosFilter::new()));
        }

        Ok(GermanAnalyzer {
            inner: analyzer.with_name("german"),
            decomposer,
            stemmer,
        })
    }

    /// The decomposer the analyzer splits compounds with.
    pub fn decomposer(&self) -> &CompoundDecomposer {
        &self.decomposer
    }

    /// The compound-aware stemmer of the analyzer.
    pub fn stemmer(&self) -> &CompoundStemmer {
        &self.stemmer
    }
}

impl Analyzer for GermanAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "german"
    }
}

impl Debug for GermanAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GermanAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compound::fixtures;
    use crate::analysis::token::{Token, TokenType};

    const AFF: &str = "SET UTF-8\nSFX N Y 1\nSFX N 0 n e\nSFX S Y 1\nSFX S 0 s .\n";
    const DIC: &str = "3\nmütze/N\nhaus/S\nkapitän/S\n";

    fn resources() -> GermanResources {
        let tree = HyphenationTree::from_patterns(fixtures::PATTERNS, std::iter::empty::<&str>());
        GermanResources::new(
            Arc::new(tree),
            Arc::new(WordDictionary::from_words(fixtures::WORDS).unwrap()),
            Arc::new(HunspellDictionary::parse(AFF, DIC).unwrap()),
        )
    }

    fn analyze(config: &GermanAnalyzerConfig, text: &str) -> Vec<Token> {
        GermanAnalyzer::with_resources(&resources(), config)
            .unwrap()
            .analyze(text)
            .unwrap()
            .collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_compound_and_primary_word() {
        let config = GermanAnalyzerConfig {
            normalize_umlauts: false,
            ..GermanAnalyzerConfig::default()
        };
        let tokens = analyze(&config, "Die Dampfschifffahrtskapitänsmützen");

        assert_eq!(
            texts(&tokens),
            vec!["dampfschifffahrtskapitänsmütze", "mütze"]
        );
        assert_eq!(tokens[0].position, 1);
        assert_eq!(tokens[0].position_increment, 2);
        assert_eq!(tokens[1].position_increment, 0);
        assert_eq!(tokens[1].token_type(), Some(TokenType::PrimaryWord));
        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 37);
    }

    #[test]
    fn test_umlaut_normalization() {
        let tokens = analyze(&GermanAnalyzerConfig::default(), "Kapitänsmützen");
        assert_eq!(texts(&tokens), vec!["kapitansmutze", "mutze"]);
    }

    #[test]
    fn test_remove_initial_term() {
        let config = GermanAnalyzerConfig {
            keep_compound_original: false,
            normalize_umlauts: false,
            ..GermanAnalyzerConfig::default()
        };
        let tokens = analyze(&config, "Kapitänsmützen Haus");

        assert_eq!(texts(&tokens), vec!["mütze", "haus"]);
        assert_eq!(tokens[0].position_increment, 1);
    }

    #[test]
    fn test_numbers() {
        let tokens = analyze(&GermanAnalyzerConfig::default(), "Tel. 0711 12-34");

        assert_eq!(
            texts(&tokens),
            vec!["tel", "0711", "711", "07111234", "7111234", "1234", "34", "12", "34"]
        );
    }

    #[test]
    fn test_protected_words() {
        let config = GermanAnalyzerConfig {
            protected_words: vec!["Haustür".to_string()],
            ..GermanAnalyzerConfig::default()
        };
        let tokens = analyze(&config, "Haustür");

        // Locked tokens skip stemming and umlaut folding.
        assert_eq!(texts(&tokens), vec!["haustür"]);
        assert!(tokens[0].is_keyword());
    }

    #[test]
    fn test_markup_is_stripped() {
        let tokens = analyze(&GermanAnalyzerConfig::default(), "<p>Haus</p>");

        assert_eq!(texts(&tokens), vec!["haus"]);
        assert_eq!(tokens[0].start_offset, 3);
    }

    #[test]
    fn test_config_validate() {
        let config = GermanAnalyzerConfig::default();
        assert!(matches!(
            config.validate(),
            Err(DecompoundError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = GermanAnalyzerConfig {
            hyphenation_patterns: PathBuf::from("de.tex"),
            hunspell_affix: PathBuf::from("/abs/de.aff"),
            ..GermanAnalyzerConfig::default()
        };
        config.resolve_paths(Path::new("/etc/decompound"));

        assert_eq!(
            config.hyphenation_patterns,
            PathBuf::from("/etc/decompound/de.tex")
        );
        assert_eq!(config.hunspell_affix, PathBuf::from("/abs/de.aff"));
        assert!(config.compound_dictionary.as_os_str().is_empty());
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer =
            GermanAnalyzer::with_resources(&resources(), &GermanAnalyzerConfig::default())
                .unwrap();
        assert_eq!(analyzer.name(), "german");
        assert!(analyzer.decomposer().is_compound("haustür"));
    }
}

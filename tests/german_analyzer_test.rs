//! Integration tests for the German analyzer against the fixture resources.

use std::fs;
use std::path::PathBuf;

use decompound::analysis::analyzer::{Analyzer, GermanAnalyzer, GermanAnalyzerConfig};
use decompound::analysis::token::{Token, TokenType};
use decompound::error::{DecompoundError, Result};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_config() -> GermanAnalyzerConfig {
    GermanAnalyzerConfig {
        hyphenation_patterns: fixture("de.tex"),
        compound_dictionary: fixture("words.txt"),
        hunspell_affix: fixture("de.aff"),
        hunspell_dictionary: fixture("de.dic"),
        ..GermanAnalyzerConfig::default()
    }
}

fn analyze(config: &GermanAnalyzerConfig, text: &str) -> Result<Vec<Token>> {
    let analyzer = GermanAnalyzer::from_config(config)?;
    Ok(analyzer.analyze(text)?.collect())
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_compound_is_stemmed_through_primary_word() -> Result<()> {
    let config = GermanAnalyzerConfig {
        normalize_umlauts: false,
        ..fixture_config()
    };
    let tokens = analyze(&config, "Dampfschifffahrtskapitänsmützen")?;

    assert_eq!(
        texts(&tokens),
        vec!["dampfschifffahrtskapitänsmütze", "mütze"]
    );
    assert_eq!(tokens[0].position, 0);
    assert_eq!(tokens[1].position, 0);
    assert_eq!(tokens[1].position_increment, 0);
    assert_eq!(tokens[1].token_type(), Some(TokenType::PrimaryWord));

    Ok(())
}

#[test]
fn test_compound_with_umlaut_folding() -> Result<()> {
    let tokens = analyze(&fixture_config(), "Dampfschifffahrtskapitänsmützen")?;

    assert_eq!(
        texts(&tokens),
        vec!["dampfschifffahrtskapitansmutze", "mutze"]
    );

    Ok(())
}

#[test]
fn test_plain_word_unchanged() -> Result<()> {
    let tokens = analyze(&fixture_config(), "Haus")?;

    assert_eq!(texts(&tokens), vec!["haus"]);
    assert_eq!(tokens[0].start_offset, 0);
    assert_eq!(tokens[0].end_offset, 4);

    Ok(())
}

#[test]
fn test_number_gaps_closed() -> Result<()> {
    let tokens = analyze(&fixture_config(), "12 34 56")?;

    assert_eq!(
        texts(&tokens),
        vec!["12", "123456", "3456", "56", "34", "56"]
    );
    assert_eq!(tokens[1].start_offset, 0);
    assert_eq!(tokens[1].end_offset, 8);
    assert_eq!(tokens[1].position_increment, 0);

    Ok(())
}

#[test]
fn test_leading_zeros_removed() -> Result<()> {
    let tokens = analyze(&fixture_config(), "0007777")?;

    assert_eq!(texts(&tokens), vec!["0007777", "7777"]);
    assert_eq!(tokens[1].position_increment, 0);
    assert_eq!(tokens[1].token_type(), Some(TokenType::Num));

    Ok(())
}

#[test]
fn test_numeric_stages_can_be_disabled() -> Result<()> {
    let config = GermanAnalyzerConfig {
        close_number_gaps: false,
        strip_leading_zeros: false,
        ..fixture_config()
    };
    let tokens = analyze(&config, "007 12 34")?;

    assert_eq!(texts(&tokens), vec!["007", "12", "34"]);

    Ok(())
}

#[test]
fn test_config_file_resolves_relative_paths() -> Result<()> {
    let config = GermanAnalyzerConfig::from_file(fixture("german.json"))?;
    assert_eq!(config.hunspell_dictionary, fixture("de.dic"));

    let tokens = analyze(&config, "Haustüren")?;
    assert_eq!(texts(&tokens), vec!["haustur", "tur"]);

    Ok(())
}

#[test]
fn test_config_from_tempfile() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("analyzer.json");

    let config = GermanAnalyzerConfig {
        keep_compound_original: false,
        normalize_umlauts: false,
        stop_words: Some(vec!["und".to_string()]),
        ..fixture_config()
    };
    fs::write(&path, serde_json::to_string_pretty(&config)?)?;

    let loaded = GermanAnalyzerConfig::from_file(&path)?;
    assert_eq!(loaded, config);

    let tokens = analyze(&loaded, "Kapitänsmützen und Haustüren")?;
    assert_eq!(texts(&tokens), vec!["mütze", "tür"]);

    Ok(())
}

#[test]
fn test_missing_resource_fails_at_construction() {
    let config = GermanAnalyzerConfig {
        hunspell_dictionary: fixture("missing.dic"),
        ..fixture_config()
    };

    let result = GermanAnalyzer::from_config(&config);
    assert!(matches!(result, Err(DecompoundError::Resource(_))));
}

#[test]
fn test_missing_config_file() {
    let result = GermanAnalyzerConfig::from_file(fixture("missing.json"));
    assert!(matches!(result, Err(DecompoundError::Resource(_))));
}

#[test]
fn test_unset_resource_path_is_invalid_config() {
    let config = GermanAnalyzerConfig {
        compound_dictionary: PathBuf::new(),
        ..fixture_config()
    };

    let result = GermanAnalyzer::from_config(&config);
    assert!(matches!(result, Err(DecompoundError::InvalidConfig(_))));
}

#[test]
fn test_shared_analyzer_across_threads() -> Result<()> {
    let analyzer = std::sync::Arc::new(GermanAnalyzer::from_config(&fixture_config())?);

    let handles: Vec<_> = ["Haustüren", "Kapitänsmützen"]
        .into_iter()
        .map(|text| {
            let analyzer = std::sync::Arc::clone(&analyzer);
            std::thread::spawn(move || {
                analyzer
                    .analyze(text)
                    .map(|tokens| tokens.map(|t| t.text).collect::<Vec<_>>())
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles
        .into_iter()
        .map(|h| h.join().expect("analysis thread panicked"))
        .collect::<Result<_>>()?;

    assert_eq!(results[0], vec!["haustur", "tur"]);
    assert_eq!(results[1], vec!["kapitansmutze", "mutze"]);

    Ok(())
}

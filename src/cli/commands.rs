//! Command implementations for the decompound CLI.

use std::fs;
use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, GermanAnalyzer, GermanAnalyzerConfig};
use crate::analysis::compound::HyphenationTree;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{DecompoundError, Result};

/// Execute a CLI command.
pub fn execute_command(args: DecompoundArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Decompose(decompose_args) => decompose(decompose_args, &args),
        Command::Stem(stem_args) => stem(stem_args, &args),
        Command::Hyphenate(hyphenate_args) => hyphenate(hyphenate_args, &args),
    }
}

/// Analyze a text, or every line of an input file in parallel.
fn analyze(args: &AnalyzeArgs, cli_args: &DecompoundArgs) -> Result<()> {
    let analyzer = load_analyzer(&args.config)?;

    let results = match (&args.text, &args.input) {
        (_, Some(input)) => {
            let content = read_input(input)?;
            let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
            info!("Analyzing {} lines from {}", lines.len(), input.display());

            lines
                .par_iter()
                .map(|line| analyze_text(&analyzer, line))
                .collect::<Result<Vec<_>>>()?
        }
        (Some(text), None) => vec![analyze_text(&analyzer, text)?],
        (None, None) => {
            return Err(DecompoundError::invalid_argument(
                "either TEXT or --input is required",
            ));
        }
    };

    output_result(&results, cli_args)
}

fn analyze_text(analyzer: &GermanAnalyzer, text: &str) -> Result<AnalysisResult> {
    let tokens = analyzer.analyze(text)?.map(TokenOutput::from).collect();
    Ok(AnalysisResult {
        text: text.to_string(),
        tokens,
    })
}

/// Print the split of every word.
fn decompose(args: &DecomposeArgs, cli_args: &DecompoundArgs) -> Result<()> {
    let analyzer = load_analyzer(&args.config)?;
    let decomposer = analyzer.decomposer();

    let results: Vec<DecompositionResult> = args
        .words
        .iter()
        .map(|word| DecompositionResult {
            word: word.clone(),
            split: decomposer.decompose(word),
        })
        .collect();

    output_result(&results, cli_args)
}

/// Print the compound-aware stem of every word.
fn stem(args: &StemArgs, cli_args: &DecompoundArgs) -> Result<()> {
    let analyzer = load_analyzer(&args.config)?;
    let stemmer = analyzer.stemmer();

    let results: Vec<StemOutput> = args
        .words
        .iter()
        .map(|word| {
            let result = stemmer.stem_word(word);
            StemOutput {
                word: word.clone(),
                stem: result.stem,
                changed: result.changed,
            }
        })
        .collect();

    output_result(&results, cli_args)
}

/// Print the break points and syllables of every word.
fn hyphenate(args: &HyphenateArgs, cli_args: &DecompoundArgs) -> Result<()> {
    let tree = HyphenationTree::load(&args.patterns)?.with_margins(args.left_min, args.right_min);
    debug!("Loaded {} hyphenation patterns", tree.pattern_count());

    let results: Vec<HyphenationResult> = args
        .words
        .iter()
        .map(|word| HyphenationResult {
            word: word.clone(),
            break_points: tree.break_points(word),
            syllables: tree.syllables(word).into_iter().map(String::from).collect(),
        })
        .collect();

    output_result(&results, cli_args)
}

fn load_analyzer(config_path: &Path) -> Result<GermanAnalyzer> {
    let config = GermanAnalyzerConfig::from_file(config_path)?;
    debug!("Loaded analyzer configuration from {}", config_path.display());
    GermanAnalyzer::from_config(&config)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        DecompoundError::invalid_argument(format!(
            "Failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })
}

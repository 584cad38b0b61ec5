//! Command line argument parsing for the decompound CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// decompound - German compound decomposition and stemming
#[derive(Parser, Debug, Clone)]
#[command(name = "decompound")]
#[command(about = "Decompose, stem and analyze German compound words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DecompoundArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DecompoundArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the German analyzer over text
    Analyze(AnalyzeArgs),

    /// Split words into their constituents
    Decompose(DecomposeArgs),

    /// Stem words, going through the primary word of compounds
    Stem(StemArgs),

    /// Show hyphenation break points
    Hyphenate(HyphenateArgs),
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Text to analyze
    #[arg(value_name = "TEXT", required_unless_present = "input")]
    pub text: Option<String>,

    /// Analyze every line of this file instead
    #[arg(short, long, value_name = "INPUT_FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,
}

/// Arguments for decomposing words
#[derive(Parser, Debug, Clone)]
pub struct DecomposeArgs {
    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Words to decompose
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for hyphenating words
#[derive(Parser, Debug, Clone)]
pub struct HyphenateArgs {
    /// TeX hyphenation pattern file
    #[arg(short, long, value_name = "PATTERN_FILE")]
    pub patterns: PathBuf,

    /// Minimum number of characters before the first break
    #[arg(long, default_value = "1")]
    pub left_min: usize,

    /// Minimum number of characters after the last break
    #[arg(long, default_value = "1")]
    pub right_min: usize,

    /// Words to hyphenate
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_analyze_command() {
        let args = DecompoundArgs::try_parse_from([
            "decompound",
            "analyze",
            "--config",
            "german.json",
            "Dampfschifffahrtskapitänsmützen",
        ])
        .unwrap();

        if let Command::Analyze(analyze) = args.command {
            assert_eq!(analyze.config, PathBuf::from("german.json"));
            assert_eq!(
                analyze.text.as_deref(),
                Some("Dampfschifffahrtskapitänsmützen")
            );
            assert!(analyze.input.is_none());
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_requires_text_or_input() {
        let result = DecompoundArgs::try_parse_from(["decompound", "analyze", "-c", "g.json"]);
        assert!(result.is_err());

        let args = DecompoundArgs::try_parse_from([
            "decompound",
            "analyze",
            "-c",
            "g.json",
            "--input",
            "lines.txt",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Analyze(ref a) if a.input.is_some()));
    }

    #[test]
    fn test_hyphenate_command() {
        let args = DecompoundArgs::try_parse_from([
            "decompound",
            "-f",
            "json",
            "--pretty",
            "hyphenate",
            "--patterns",
            "de.tex",
            "--left-min",
            "2",
            "haustür",
            "kapitän",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        if let Command::Hyphenate(hyphenate) = args.command {
            assert_eq!(hyphenate.left_min, 2);
            assert_eq!(hyphenate.right_min, 1);
            assert_eq!(hyphenate.words, vec!["haustür", "kapitän"]);
        } else {
            panic!("Expected Hyphenate command");
        }
    }

    #[test]
    fn test_words_required() {
        let result = DecompoundArgs::try_parse_from(["decompound", "stem", "-c", "g.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args =
            DecompoundArgs::try_parse_from(["decompound", "stem", "-c", "g.json", "haus"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            DecompoundArgs::try_parse_from(["decompound", "-vvv", "stem", "-c", "g.json", "haus"])
                .unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = DecompoundArgs::try_parse_from([
            "decompound",
            "-q",
            "-vv",
            "stem",
            "-c",
            "g.json",
            "haus",
        ])
        .unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}

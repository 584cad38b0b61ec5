//! Output formatting for CLI commands.

use serde::Serialize;

use crate::analysis::compound::CompoundSplit;
use crate::analysis::token::{Token, TokenType};
use crate::cli::args::{DecompoundArgs, OutputFormat};
use crate::error::Result;

/// One token as printed by `analyze`.
#[derive(Debug, Serialize)]
pub struct TokenOutput {
    pub text: String,
    pub position: usize,
    pub position_increment: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    pub token_type: Option<TokenType>,
    pub keyword: bool,
}

impl From<Token> for TokenOutput {
    fn from(token: Token) -> Self {
        TokenOutput {
            token_type: token.token_type(),
            keyword: token.is_keyword(),
            text: token.text,
            position: token.position,
            position_increment: token.position_increment,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
        }
    }
}

/// Tokens produced for one input text.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub text: String,
    pub tokens: Vec<TokenOutput>,
}

/// Split of one word, `None` when it is not a compound.
#[derive(Debug, Serialize)]
pub struct DecompositionResult {
    pub word: String,
    pub split: Option<CompoundSplit>,
}

/// Stem of one word.
#[derive(Debug, Serialize)]
pub struct StemOutput {
    pub word: String,
    pub stem: String,
    pub changed: bool,
}

/// Break points of one word.
#[derive(Debug, Serialize)]
pub struct HyphenationResult {
    pub word: String,
    pub break_points: Vec<usize>,
    pub syllables: Vec<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for AnalysisResult {
    fn print_human(&self) {
        println!("{}", self.text);
        for token in &self.tokens {
            let token_type = token
                .token_type
                .map(|t| format!("{t:?}"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:>3} +{} [{}..{}] {:<12} {}{}",
                token.position,
                token.position_increment,
                token.start_offset,
                token.end_offset,
                token_type,
                token.text,
                if token.keyword { " (keyword)" } else { "" }
            );
        }
    }
}

impl HumanOutput for DecompositionResult {
    fn print_human(&self) {
        match &self.split {
            Some(split) => {
                let parts: Vec<String> = split
                    .subwords
                    .iter()
                    .map(|s| match &s.linking_morpheme {
                        Some(morpheme) => {
                            let stem_len = s.text.len().saturating_sub(morpheme.len());
                            let stem = s.text.get(..stem_len).unwrap_or(&s.text);
                            format!("{stem}(+{morpheme})")
                        }
                        None => s.text.clone(),
                    })
                    .collect();
                println!(
                    "{}: {} | primary: {}",
                    self.word,
                    parts.join(" + "),
                    split.primary_word
                );
            }
            None => println!("{}: not a compound", self.word),
        }
    }
}

impl HumanOutput for StemOutput {
    fn print_human(&self) {
        if self.changed {
            println!("{} -> {}", self.word, self.stem);
        } else {
            println!("{} (unchanged)", self.word);
        }
    }
}

impl HumanOutput for HyphenationResult {
    fn print_human(&self) {
        println!(
            "{}: {} {:?}",
            self.word,
            self.syllables.join("-"),
            self.break_points
        );
    }
}

impl<T: HumanOutput> HumanOutput for Vec<T> {
    fn print_human(&self) {
        for item in self {
            item.print_human();
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &DecompoundArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DecompoundArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

//! The crate-wide error type.
//!
//! Analysis only fails hard while resources are loaded: hyphenation
//! patterns, word lists, Hunspell tables and analyzer configuration. Once an
//! analyzer exists, problems with single tokens are logged and recovered
//! inside the filter chain.
//!
//! ```
//! use decompound::error::{DecompoundError, Result};
//!
//! fn min_size(value: usize) -> Result<usize> {
//!     if value == 0 {
//!         return Err(DecompoundError::invalid_config("min_subword_size must be > 0"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(matches!(min_size(0), Err(DecompoundError::InvalidConfig(_))));
//! ```

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecompoundError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A filter or tokenizer could not run.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Patterns, word list, affix table or configuration could not be loaded.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Malformed line in a resource file. Loaders wrap it into `Resource`.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bad command line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecompoundError>;

impl DecompoundError {
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DecompoundError::Analysis(msg.into())
    }

    pub fn resource<S: Into<String>>(msg: S) -> Self {
        DecompoundError::Resource(msg.into())
    }

    pub fn parse<S: Into<String>>(msg: S) -> Self {
        DecompoundError::Parse(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DecompoundError::InvalidConfig(msg.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DecompoundError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_kind() {
        assert_eq!(
            DecompoundError::resource("missing de.dic").to_string(),
            "Resource error: missing de.dic"
        );
        assert_eq!(
            DecompoundError::invalid_argument("no input").to_string(),
            "Invalid argument: no input"
        );
        assert_eq!(
            DecompoundError::parse("line 3: bad flag").to_string(),
            "Parse error: line 3: bad flag"
        );
    }

    #[test]
    fn test_from_conversions() {
        let error: DecompoundError = io::Error::new(io::ErrorKind::NotFound, "de.tex").into();
        assert!(matches!(error, DecompoundError::Io(_)));

        let error: DecompoundError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(matches!(error, DecompoundError::Json(_)));
    }
}

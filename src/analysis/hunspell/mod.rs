//! Hunspell dictionary support.
//!
//! Reads the affix (`.aff`) and word (`.dic`) files of a Hunspell dictionary
//! for affix-stripping stemming. Compounding directives and morphological
//! fields are not interpreted.

pub mod affix;
pub mod dictionary;

pub use affix::{AffixKind, AffixRule, AffixTable, Condition, Flag, FlagMode};
pub use dictionary::{Encoding, HunspellDictionary};

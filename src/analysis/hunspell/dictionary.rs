//! Hunspell dictionary: an affix table plus the word list of a `.dic` file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::analysis::hunspell::affix::{AffixRule, AffixTable, Flag, FlagMode};
use crate::error::{DecompoundError, Result};

/// Character encodings accepted in the `SET` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
}

impl Encoding {
    /// Find the `SET` directive in raw affix bytes. Defaults to UTF-8.
    fn detect(aff: &[u8]) -> Result<Self> {
        for line in aff.split(|&b| b == b'\n') {
            let line = String::from_utf8_lossy(line);
            let mut fields = line.split_whitespace();
            if fields.next().map(|d| d.trim_start_matches('\u{feff}')) != Some("SET") {
                continue;
            }
            let name = fields.next().unwrap_or("").to_ascii_uppercase();
            return match name.as_str() {
                "UTF-8" | "UTF8" => Ok(Encoding::Utf8),
                "ISO8859-1" | "ISO-8859-1" | "LATIN1" => Ok(Encoding::Latin1),
                other => Err(DecompoundError::resource(format!(
                    "unsupported affix file encoding '{other}'"
                ))),
            };
        }
        Ok(Encoding::Utf8)
    }

    fn decode(self, bytes: &[u8], what: &str) -> Result<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| {
                DecompoundError::resource(format!("{what} is not valid UTF-8: {e}"))
            }),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

/// A loaded Hunspell dictionary.
///
/// Words are stored lowercased, so lookups ignore case.
#[derive(Debug, Clone)]
pub struct HunspellDictionary {
    affixes: AffixTable,
    words: HashMap<String, Vec<Flag>>,
}

impl HunspellDictionary {
    /// Parse decoded `.aff` and `.dic` content.
    pub fn parse(aff: &str, dic: &str) -> Result<Self> {
        let affixes = AffixTable::parse(aff)?;
        let words = parse_dic(dic, affixes.flag_mode)?;
        Ok(HunspellDictionary { affixes, words })
    }

    /// Parse raw `.aff` and `.dic` bytes, decoding them per the `SET`
    /// directive.
    pub fn from_bytes(aff: &[u8], dic: &[u8]) -> Result<Self> {
        let encoding = Encoding::detect(aff)?;
        let aff = encoding.decode(aff, "affix file")?;
        let dic = encoding.decode(dic, "dictionary file")?;
        Self::parse(&aff, &dic)
    }

    /// Load a dictionary from an affix file and a word file.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(aff_path: P, dic_path: Q) -> Result<Self> {
        let aff_path = aff_path.as_ref();
        let dic_path = dic_path.as_ref();
        let read = |path: &Path| {
            fs::read(path).map_err(|e| {
                DecompoundError::resource(format!(
                    "Failed to read Hunspell file '{}': {}",
                    path.display(),
                    e
                ))
            })
        };

        let aff = read(aff_path)?;
        let dic = read(dic_path)?;
        let encoding = Encoding::detect(&aff)?;

        let affixes =
            AffixTable::parse(&encoding.decode(&aff, "affix file")?).map_err(malformed(aff_path))?;
        let words = parse_dic(&encoding.decode(&dic, "dictionary file")?, affixes.flag_mode)
            .map_err(malformed(dic_path))?;
        let dictionary = HunspellDictionary { affixes, words };

        debug!(
            "loaded Hunspell dictionary {} with {} words, {} prefixes, {} suffixes",
            dic_path.display(),
            dictionary.len(),
            dictionary.affixes.prefixes.len(),
            dictionary.affixes.suffixes.len()
        );
        Ok(dictionary)
    }

    /// Flags of a word, if it is in the dictionary.
    pub fn lookup(&self, word: &str) -> Option<&[Flag]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// Whether a word may stand on its own, i.e. is present and not marked
    /// `NEEDAFFIX`.
    pub fn is_standalone(&self, word: &str) -> bool {
        match (self.lookup(word), self.affixes.need_affix) {
            (Some(flags), Some(need_affix)) => !flags.contains(&need_affix),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    pub fn prefixes(&self) -> &[AffixRule] {
        &self.affixes.prefixes
    }

    pub fn suffixes(&self) -> &[AffixRule] {
        &self.affixes.suffixes
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Turn a parse error into a resource error naming the offending file.
fn malformed(path: &Path) -> impl FnOnce(DecompoundError) -> DecompoundError + '_ {
    move |e| match e {
        DecompoundError::Parse(msg) => DecompoundError::resource(format!(
            "Malformed Hunspell file '{}': {}",
            path.display(),
            msg
        )),
        other => other,
    }
}

fn parse_dic(dic: &str, flag_mode: FlagMode) -> Result<HashMap<String, Vec<Flag>>> {
    let mut lines = dic
        .lines()
        .map(|line| line.trim_start_matches('\u{feff}').trim())
        .filter(|line| !line.is_empty())
        .peekable();

    let declared = match lines.peek() {
        Some(first) if first.bytes().all(|b| b.is_ascii_digit()) => {
            let count = first.parse::<usize>().ok();
            lines.next();
            count
        }
        _ => None,
    };

    let mut words: HashMap<String, Vec<Flag>> = HashMap::new();
    let mut entries = 0usize;

    for line in lines {
        if line.starts_with('#') {
            continue;
        }
        // Morphological fields follow the first whitespace.
        let entry = line.split_whitespace().next().unwrap_or("");
        let (word, flags) = split_entry(entry);
        if word.is_empty() {
            continue;
        }

        let flags = match flags {
            Some(flags) => flag_mode.parse_flags(flags)?,
            None => Vec::new(),
        };

        let slot = words.entry(word.to_lowercase()).or_default();
        slot.extend(flags);
        slot.sort_unstable();
        slot.dedup();
        entries += 1;
    }

    if let Some(declared) = declared
        && declared != entries
    {
        warn!("dictionary declares {declared} entries but contains {entries}");
    }

    Ok(words)
}

/// Split `word/flags` at the first unescaped slash.
fn split_entry(entry: &str) -> (String, Option<&str>) {
    let mut word = String::with_capacity(entry.len());
    let mut chars = entry.char_indices();

    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    word.push(escaped);
                }
            }
            '/' => return (word, Some(&entry[idx + 1..])),
            _ => word.push(c),
        }
    }

    (word, None)
}

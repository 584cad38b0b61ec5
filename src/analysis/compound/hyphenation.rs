//! Hyphenation tree using Liang's TeX algorithm.
//!
//! Patterns encode inter-character levels as digits between letters:
//! `"f1s"` means a level of 1 between `f` and `s`. All patterns matching
//! any substring of `.word.` are applied, the maximum level wins at each
//! position, and odd levels allow a break.
//!
//! ```text
//! Patterns → PatternTrie (compile once)
//! Word → wrap with delimiters → slide all substrings through trie
//!      → collect max levels at each inter-character position
//!      → odd levels = break allowed
//! ```
//!
//! Break points are char offsets into the word: for `haustür` with a break
//! after `haus`, the offset is 4.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::analysis::compound::fold_chars;
use crate::error::{DecompoundError, Result};

/// Default minimum number of chars before the first break.
pub const DEFAULT_LEFT_MIN: usize = 1;
/// Default minimum number of chars after the last break.
pub const DEFAULT_RIGHT_MIN: usize = 1;

/// A compiled hyphenation pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenationPattern {
    /// The letters of the pattern (lowercase, no digits).
    pub chars: Vec<char>,
    /// Levels at each inter-character position. Length = `chars.len() + 1`.
    pub levels: Vec<u8>,
}

/// Parse a TeX-format pattern such as `"hy3p"` or `".ab4c"`.
///
/// Returns `None` if the pattern has no letters.
pub fn compile_pattern(pattern: &str) -> Option<HyphenationPattern> {
    let mut chars = Vec::new();
    let mut levels = Vec::new();
    let mut pending_digit: Option<u8> = None;

    for ch in pattern.chars() {
        if let Some(digit) = ch.to_digit(10) {
            pending_digit = Some(digit as u8);
        } else {
            levels.push(pending_digit.take().unwrap_or(0));
            chars.push(ch.to_lowercase().next().unwrap_or(ch));
        }
    }
    levels.push(pending_digit.unwrap_or(0));

    if chars.is_empty() {
        return None;
    }

    Some(HyphenationPattern { chars, levels })
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, usize>,
    levels: Option<Vec<u8>>,
}

/// Immutable pattern automaton mapping words to permissible break points.
#[derive(Debug, Clone)]
pub struct HyphenationTree {
    nodes: Vec<TrieNode>,
    /// Lowercase exception words with explicit break offsets.
    exceptions: HashMap<String, Vec<usize>>,
    pattern_count: usize,
    left_min: usize,
    right_min: usize,
}

impl HyphenationTree {
    /// Build a tree from TeX patterns and hyphen-delimited exception words
    /// (`"dampf-schiff"`).
    pub fn from_patterns<P, E, S, T>(patterns: P, exceptions: E) -> Self
    where
        P: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut tree = HyphenationTree {
            nodes: vec![TrieNode::default()],
            exceptions: HashMap::new(),
            pattern_count: 0,
            left_min: DEFAULT_LEFT_MIN,
            right_min: DEFAULT_RIGHT_MIN,
        };

        for pattern in patterns {
            if let Some(compiled) = compile_pattern(pattern.as_ref()) {
                tree.insert(&compiled);
            }
        }

        for exception in exceptions {
            let (word, breaks) = parse_exception(exception.as_ref());
            tree.exceptions.insert(word, breaks);
        }

        tree
    }

    /// Parse a TeX pattern file.
    ///
    /// `%` starts a comment. Patterns are read from `\patterns{...}` and
    /// exceptions from `\hyphenation{...}`; other commands are skipped. A
    /// file without any command is read as a plain pattern list.
    pub fn parse(content: &str) -> Result<Self> {
        let text: String = content
            .lines()
            .map(|line| line.split('%').next().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n");

        if !text.contains('\\') {
            return Ok(Self::from_patterns(
                text.split_whitespace(),
                std::iter::empty::<&str>(),
            ));
        }

        let mut patterns = Vec::new();
        let mut exceptions = Vec::new();
        let mut rest = text.as_str();

        while let Some(idx) = rest.find('\\') {
            rest = &rest[idx + 1..];
            let name_end = rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            let name = &rest[..name_end];
            rest = rest[name_end..].trim_start();

            let Some(body_start) = rest.strip_prefix('{') else {
                continue;
            };
            let close = body_start.find('}').ok_or_else(|| {
                DecompoundError::parse(format!("unterminated \\{name} block in pattern file"))
            })?;
            let body = &body_start[..close];

            match name {
                "patterns" => patterns.extend(body.split_whitespace()),
                "hyphenation" => exceptions.extend(body.split_whitespace()),
                _ => {}
            }

            rest = &body_start[close + 1..];
        }

        Ok(Self::from_patterns(patterns, exceptions))
    }

    /// Load a TeX pattern file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DecompoundError::resource(format!(
                "Failed to read hyphenation patterns '{}': {}",
                path.display(),
                e
            ))
        })?;

        let tree = Self::parse(&content).map_err(|e| {
            DecompoundError::resource(format!(
                "Malformed hyphenation patterns '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(
            "loaded {} hyphenation patterns and {} exceptions from {}",
            tree.pattern_count,
            tree.exceptions.len(),
            path.display()
        );
        Ok(tree)
    }

    /// Set the minimum number of chars kept before the first and after the
    /// last break. Values below 1 are raised to 1.
    pub fn with_margins(mut self, left: usize, right: usize) -> Self {
        self.left_min = left.max(1);
        self.right_min = right.max(1);
        self
    }

    /// Number of distinct patterns in the tree.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    fn insert(&mut self, pattern: &HyphenationPattern) {
        let mut node_idx = 0;
        for &ch in &pattern.chars {
            node_idx = match self.nodes[node_idx].children.get(&ch) {
                Some(&idx) => idx,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node_idx].children.insert(ch, idx);
                    idx
                }
            };
        }
        if self.nodes[node_idx].levels.is_none() {
            self.pattern_count += 1;
        }
        self.nodes[node_idx].levels = Some(pattern.levels.clone());
    }

    /// Apply every pattern matching a substring that starts at `start`.
    fn apply_at(&self, chars: &[char], start: usize, out_levels: &mut [u8]) {
        let mut node_idx = 0;
        for &ch in &chars[start..] {
            let Some(&next) = self.nodes[node_idx].children.get(&ch) else {
                break;
            };
            node_idx = next;
            if let Some(levels) = &self.nodes[node_idx].levels {
                for (j, &level) in levels.iter().enumerate() {
                    if let Some(slot) = out_levels.get_mut(start + j) {
                        *slot = (*slot).max(level);
                    }
                }
            }
        }
    }

    /// Find the break points of a word as ascending char offsets, strictly
    /// inside the word and respecting the margins.
    pub fn break_points(&self, word: &str) -> Vec<usize> {
        self.break_points_folded(&fold_chars(word))
    }

    /// Same as [`break_points`](Self::break_points) for an already
    /// lowercased char sequence.
    pub(crate) fn break_points_folded(&self, word: &[char]) -> Vec<usize> {
        let n = word.len();
        if n < self.left_min + self.right_min {
            return Vec::new();
        }
        let last = n - self.right_min;

        if !self.exceptions.is_empty() {
            let key: String = word.iter().collect();
            if let Some(breaks) = self.exceptions.get(&key) {
                return breaks
                    .iter()
                    .copied()
                    .filter(|&offset| offset >= self.left_min && offset <= last)
                    .collect();
            }
        }

        let mut delimited = Vec::with_capacity(n + 2);
        delimited.push('.');
        delimited.extend_from_slice(word);
        delimited.push('.');

        // levels[i] is the level before delimited[i].
        let mut levels = vec![0u8; delimited.len() + 1];
        for start in 0..delimited.len() {
            self.apply_at(&delimited, start, &mut levels);
        }

        // A break before word[j] sits before delimited[j + 1].
        (self.left_min..=last)
            .filter(|&j| levels[j + 1] % 2 == 1)
            .collect()
    }

    /// Split a word into its syllables at the break points.
    pub fn syllables<'a>(&self, word: &'a str) -> Vec<&'a str> {
        let breaks = self.break_points(word);
        let byte_offsets: Vec<usize> = word.char_indices().map(|(idx, _)| idx).collect();

        let mut syllables = Vec::with_capacity(breaks.len() + 1);
        let mut from = 0;
        for offset in breaks {
            let to = byte_offsets[offset];
            syllables.push(&word[from..to]);
            from = to;
        }
        syllables.push(&word[from..]);
        syllables
    }
}

/// Parse an exception such as `"dampf-schiff"` into `("dampfschiff", [5])`.
fn parse_exception(exception: &str) -> (String, Vec<usize>) {
    let mut word = String::new();
    let mut breaks = Vec::new();
    let mut char_count = 0usize;

    for ch in exception.chars() {
        if ch == '-' {
            breaks.push(char_count);
        } else {
            word.push(ch.to_lowercase().next().unwrap_or(ch));
            char_count += 1;
        }
    }

    (word, breaks)
}

//! Hunspell affix file (`.aff`) parsing.
//!
//! Only the directives needed for stemming are read: `SET`, `FLAG`,
//! `NEEDAFFIX`, `PFX` and `SFX`. Everything else (`TRY`, `REP`, compounding
//! rules, ...) is ignored.
//!
//! ```text
//! SFX N Y 2          header: flag, cross product, rule count
//! SFX N 0 n e        rule: strip, affix, condition
//! SFX N 0 en [^e]
//! ```

use regex::Regex;

use crate::error::{DecompoundError, Result};

/// An affix flag, decoded according to the [`FlagMode`].
pub type Flag = u64;

/// How flags are written in the affix and dictionary files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlagMode {
    /// One char per flag (the default).
    #[default]
    Char,
    /// Two chars per flag (`FLAG long`).
    Long,
    /// Comma separated decimal numbers (`FLAG num`).
    Num,
}

impl FlagMode {
    fn parse_mode(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "long" => Ok(FlagMode::Long),
            "num" => Ok(FlagMode::Num),
            "utf-8" | "utf8" => Ok(FlagMode::Char),
            other => Err(DecompoundError::parse(format!(
                "unsupported FLAG type '{other}'"
            ))),
        }
    }

    /// Decode a flag string into its flags.
    pub fn parse_flags(self, flags: &str) -> Result<Vec<Flag>> {
        match self {
            FlagMode::Char => Ok(flags.chars().map(|c| c as Flag).collect()),
            FlagMode::Long => {
                let chars: Vec<char> = flags.chars().collect();
                if chars.len() % 2 != 0 {
                    return Err(DecompoundError::parse(format!(
                        "odd number of chars in long flags '{flags}'"
                    )));
                }
                Ok(chars
                    .chunks(2)
                    .map(|pair| ((pair[0] as Flag) << 32) | pair[1] as Flag)
                    .collect())
            }
            FlagMode::Num => flags
                .split(',')
                .filter(|f| !f.is_empty())
                .map(|f| {
                    f.trim().parse::<Flag>().map_err(|_| {
                        DecompoundError::parse(format!("invalid numeric flag '{f}'"))
                    })
                })
                .collect(),
        }
    }

    /// Decode a single flag, as used in affix headers and `NEEDAFFIX`.
    pub fn parse_flag(self, flag: &str) -> Result<Flag> {
        let flags = self.parse_flags(flag)?;
        match flags.as_slice() {
            [single] => Ok(*single),
            _ => Err(DecompoundError::parse(format!(
                "expected a single flag, found '{flag}'"
            ))),
        }
    }
}

/// Whether an affix is a prefix or a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

/// The condition an affix rule places on the root it attaches to.
#[derive(Debug, Clone)]
pub enum Condition {
    /// `.`: matches any root.
    Any,
    /// A compiled condition, anchored at the affix side of the root.
    Pattern(Regex),
}

impl Condition {
    /// Compile a Hunspell condition such as `[^aeiou]y` for the given side.
    pub fn compile(condition: &str, kind: AffixKind) -> Result<Self> {
        if condition == "." {
            return Ok(Condition::Any);
        }

        let mut pattern = String::new();
        let mut in_class = false;
        for c in condition.chars() {
            match c {
                '[' if !in_class => {
                    in_class = true;
                    pattern.push('[');
                }
                ']' if in_class => {
                    in_class = false;
                    pattern.push(']');
                }
                '.' if !in_class => pattern.push('.'),
                '\\' | '[' | '-' | '&' | '~' if in_class => {
                    pattern.push('\\');
                    pattern.push(c);
                }
                _ if in_class => pattern.push(c),
                _ => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
            }
        }
        if in_class {
            return Err(DecompoundError::parse(format!(
                "unterminated character class in condition '{condition}'"
            )));
        }

        let anchored = match kind {
            AffixKind::Prefix => format!("^(?:{pattern})"),
            AffixKind::Suffix => format!("(?:{pattern})$"),
        };
        let regex = Regex::new(&anchored).map_err(|e| {
            DecompoundError::parse(format!("invalid condition '{condition}': {e}"))
        })?;
        Ok(Condition::Pattern(regex))
    }

    /// Check a root against the condition.
    pub fn matches(&self, root: &str) -> bool {
        match self {
            Condition::Any => true,
            Condition::Pattern(regex) => regex.is_match(root),
        }
    }
}

/// A single prefix or suffix rule.
#[derive(Debug, Clone)]
pub struct AffixRule {
    pub kind: AffixKind,
    pub flag: Flag,
    /// Whether the rule combines with rules of the other kind.
    pub cross_product: bool,
    /// Text removed from the root when the affix is added.
    pub strip: String,
    /// Text added to the root.
    pub affix: String,
    pub condition: Condition,
}

impl AffixRule {
    /// Undo this rule on an inflected word, returning the candidate root if
    /// the word carries the affix and the root satisfies the condition.
    pub fn unapply(&self, word: &str) -> Option<String> {
        let root = match self.kind {
            AffixKind::Suffix => {
                let stem = word.strip_suffix(self.affix.as_str())?;
                if stem.is_empty() {
                    return None;
                }
                format!("{stem}{}", self.strip)
            }
            AffixKind::Prefix => {
                let stem = word.strip_prefix(self.affix.as_str())?;
                if stem.is_empty() {
                    return None;
                }
                format!("{}{stem}", self.strip)
            }
        };

        self.condition.matches(&root).then_some(root)
    }
}

/// The parsed contents of an affix file.
#[derive(Debug, Clone, Default)]
pub struct AffixTable {
    pub flag_mode: FlagMode,
    pub need_affix: Option<Flag>,
    pub prefixes: Vec<AffixRule>,
    pub suffixes: Vec<AffixRule>,
}

struct PendingHeader {
    kind: AffixKind,
    flag: Flag,
    cross_product: bool,
    remaining: usize,
}

impl AffixTable {
    /// Parse decoded affix file content.
    pub fn parse(content: &str) -> Result<Self> {
        let mut table = AffixTable::default();
        let mut pending: Option<PendingHeader> = None;
        let mut deferred_need_affix: Option<String> = None;

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_start_matches('\u{feff}');
            let fields: Vec<&str> = line.split_whitespace().collect();
            let Some(&directive) = fields.first() else {
                continue;
            };
            if directive.starts_with('#') {
                continue;
            }

            let kind = match directive {
                "PFX" => AffixKind::Prefix,
                "SFX" => AffixKind::Suffix,
                "FLAG" => {
                    let mode = fields.get(1).ok_or_else(|| {
                        DecompoundError::parse(format!("line {}: FLAG without type", line_no + 1))
                    })?;
                    table.flag_mode = FlagMode::parse_mode(mode)?;
                    continue;
                }
                "NEEDAFFIX" => {
                    deferred_need_affix = fields.get(1).map(|f| f.to_string());
                    continue;
                }
                _ => continue,
            };

            let context = |message: &str| {
                DecompoundError::parse(format!("line {}: {message}: '{line}'", line_no + 1))
            };

            if fields.len() < 4 {
                return Err(context("truncated affix line"));
            }
            let flag = table.flag_mode.parse_flag(fields[1])?;

            let is_rule = matches!(
                &pending,
                Some(header) if header.remaining > 0 && header.kind == kind && header.flag == flag
            );

            if !is_rule {
                let cross_product = match fields[2] {
                    "Y" => true,
                    "N" => false,
                    _ => return Err(context("cross product must be Y or N")),
                };
                let remaining = fields[3]
                    .parse::<usize>()
                    .map_err(|_| context("invalid rule count"))?;
                pending = Some(PendingHeader {
                    kind,
                    flag,
                    cross_product,
                    remaining,
                });
                continue;
            }

            let Some(header) = pending.as_mut() else {
                continue;
            };
            header.remaining -= 1;

            let strip = match fields[2] {
                "0" => String::new(),
                s => s.to_string(),
            };
            // Continuation flags after '/' are not used for stemming.
            let affix = match fields[3].split('/').next().unwrap_or("") {
                "0" => String::new(),
                s => s.to_string(),
            };
            let condition = Condition::compile(fields.get(4).copied().unwrap_or("."), kind)?;

            let rule = AffixRule {
                kind,
                flag,
                cross_product: header.cross_product,
                strip,
                affix,
                condition,
            };
            match kind {
                AffixKind::Prefix => table.prefixes.push(rule),
                AffixKind::Suffix => table.suffixes.push(rule),
            }
        }

        // The flag mode may be declared after NEEDAFFIX.
        if let Some(flag) = deferred_need_affix {
            table.need_affix = Some(table.flag_mode.parse_flag(&flag)?);
        }

        Ok(table)
    }
}

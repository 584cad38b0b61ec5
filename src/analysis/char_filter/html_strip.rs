use regex::{Captures, Regex};

use super::{CharFilter, Transformation};
use crate::error::{DecompoundError, Result};

/// Elements that separate words; they are replaced by a newline instead of
/// being dropped.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "nav", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

/// A char filter that strips HTML markup.
///
/// - Comments and `script` / `style` blocks are removed with their content.
/// - Block-level tags become a newline, all other tags are removed.
/// - Character references (`&amp;`, `&#228;`, `&#xE4;`, ...) are decoded.
///   Unknown named references are left untouched.
pub struct HtmlStripCharFilter {
    pattern: Regex,
}

impl HtmlStripCharFilter {
    /// Create a new HTML strip char filter.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"(?is)<!--.*?-->|<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>|</?([a-z][a-z0-9]*)\b[^>]*>|&(#[0-9]{1,7}|#x[0-9a-f]{1,6}|[a-z]+);",
        )
        .map_err(|e| DecompoundError::analysis(format!("Invalid markup pattern: {e}")))?;
        Ok(Self { pattern })
    }

    fn replacement(caps: &Captures<'_>) -> Option<String> {
        if let Some(tag) = caps.get(1) {
            let tag = tag.as_str().to_ascii_lowercase();
            return Some(if BLOCK_ELEMENTS.contains(&tag.as_str()) {
                "\n".to_string()
            } else {
                String::new()
            });
        }

        if let Some(entity) = caps.get(2) {
            return decode_entity(entity.as_str()).map(String::from);
        }

        // Comment or script/style block.
        Some(String::new())
    }
}

fn decode_entity(entity: &str) -> Option<char> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "auml" => 'ä',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "Auml" => 'Ä',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        _ => return None,
    };
    Some(c)
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for caps in self.pattern.captures_iter(input) {
            let Some(m) = caps.get(0) else { continue };
            let Some(replacement) = Self::replacement(&caps) else {
                continue;
            };

            output.push_str(&input[last_match_end..m.start()]);

            let new_start = output.len();
            output.push_str(&replacement);
            let new_end = output.len();

            transformations.push(Transformation::new(m.start(), m.end(), new_start, new_end));
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_inline_tags() {
        let filter = HtmlStripCharFilter::new().unwrap();
        let (output, transformations) = filter.filter("<b>Haus</b>tür");

        assert_eq!(output, "Haustür");
        assert_eq!(transformations.len(), 2);
        assert_eq!(transformations[0], Transformation::new(0, 3, 0, 0));
        assert_eq!(transformations[1], Transformation::new(7, 11, 4, 4));
    }

    #[test]
    fn test_block_tags_separate_words() {
        let filter = HtmlStripCharFilter::new().unwrap();
        let (output, _) = filter.filter("<p>Haus</p><p>Hof</p>");

        assert_eq!(output.split_whitespace().collect::<Vec<_>>(), vec!["Haus", "Hof"]);
    }

    #[test]
    fn test_remove_script_and_comments() {
        let filter = HtmlStripCharFilter::new().unwrap();
        let (output, _) =
            filter.filter("Ein<!-- kommentar --> <script>var x = '<b>';</script>Test");

        assert_eq!(output, "Ein Test");
    }

    #[test]
    fn test_decode_entities() {
        let filter = HtmlStripCharFilter::new().unwrap();
        let (output, transformations) = filter.filter("M&uuml;tze &amp; Schal &#228; &#xFC; &foo;");

        assert_eq!(output, "Mütze & Schal ä ü &foo;");
        // "&foo;" is unknown and is not recorded as an edit.
        assert_eq!(transformations.len(), 4);
        assert_eq!(transformations[0].original_start, 1);
        assert_eq!(transformations[0].original_end, 7);
        assert_eq!(transformations[0].new_start, 1);
        assert_eq!(transformations[0].new_end, 3); // 'ü' is two bytes
    }

    #[test]
    fn test_plain_text_untouched() {
        let filter = HtmlStripCharFilter::new().unwrap();
        let (output, transformations) = filter.filter("12 < 34 und 5 > 3");

        assert_eq!(output, "12 < 34 und 5 > 3");
        assert!(transformations.is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(HtmlStripCharFilter::new().unwrap().name(), "html_strip");
    }
}

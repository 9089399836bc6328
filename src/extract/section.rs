//! Blank-line segmentation of raw document text.

/// A contiguous run of non-blank lines, one candidate experience entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Trimmed non-blank lines, in document order
    pub lines: Vec<String>,
}

impl Section {
    /// Joined text of the section, used for date-span scanning
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split raw text on blank lines into ordered sections.
///
/// Each section is an ordered sequence of trimmed non-blank lines. A document
/// with no blank line yields a single section containing everything.
#[must_use]
pub fn split_into_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !buffer.is_empty() {
                sections.push(Section {
                    lines: std::mem::take(&mut buffer),
                });
            }
            continue;
        }
        buffer.push(trimmed.to_string());
    }
    if !buffer.is_empty() {
        sections.push(Section { lines: buffer });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_blank_lines() {
        let text = "line one\nline two\n\nline three\n\n\nline four";
        let sections = split_into_sections(text);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].lines, vec!["line one", "line two"]);
        assert_eq!(sections[1].lines, vec!["line three"]);
        assert_eq!(sections[2].lines, vec!["line four"]);
    }

    #[test]
    fn test_no_blank_lines_yields_one_section() {
        let sections = split_into_sections("a\nb\nc");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].lines.len(), 3);
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let sections = split_into_sections("a\n   \t\nb");
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_empty_text_yields_no_sections() {
        assert!(split_into_sections("").is_empty());
        assert!(split_into_sections("\n\n  \n").is_empty());
    }

    #[test]
    fn test_lines_are_trimmed_and_order_preserved() {
        let sections = split_into_sections("  first  \n  second  ");
        assert_eq!(sections[0].lines, vec!["first", "second"]);
        assert_eq!(sections[0].text(), "first\nsecond");
    }
}

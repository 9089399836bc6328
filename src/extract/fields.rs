//! Field extraction within a section.
//!
//! Dates are assigned to roles by keyword proximity: the first date span whose
//! window contains a role keyword wins — there is no re-scoring of later
//! candidates. Start and end dates only consider the window immediately
//! preceding a span; issuance dates additionally consider the following
//! window, and finally fall back to the last date span in the section, since
//! a certificate's own issuance stamp typically appears at the end.
//!
//! Known limitation: when two roles' keywords both precede two different
//! dates within one window radius, the first accepted span wins for each
//! role; the heuristic does not disambiguate.

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::core::record::ExperienceRecord;
use crate::extract::dates::{parse_date_span, DATE_SPAN};
use crate::extract::locale::{DateRole, Locale};
use crate::extract::section::{split_into_sections, Section};

/// Character radius around a date span searched for role keywords
pub const KEYWORD_WINDOW: usize = 80;

/// Which side of a date span to search for role keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowSide {
    Before,
    After,
}

/// Extracts experience records from raw document text for one locale.
pub struct FieldExtractor {
    locale: Locale,
    hint_strip: Regex,
}

impl FieldExtractor {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        // Strips employer-hint tokens and colons from a hinted line
        let alternation = locale
            .employer_hints
            .iter()
            .map(|h| regex::escape(h))
            .collect::<Vec<_>>()
            .join("|");
        let hint_strip = Regex::new(&format!("(?i){alternation}|:")).expect("valid hint pattern");

        Self { locale, hint_strip }
    }

    /// Extract one record per section that carries at least one dated role.
    ///
    /// Sections with no recognizable date in any role are discarded; a
    /// missing employer alone never discards a section.
    #[must_use]
    pub fn extract(&self, text: &str, source: &str) -> Vec<ExperienceRecord> {
        let mut sections = split_into_sections(text);
        if sections.is_empty() {
            sections = vec![Section {
                lines: vec![text.trim().to_string()],
            }];
        }

        let mut records = Vec::new();
        for section in &sections {
            let section_text = section.text();

            let start_date = self.role_date(&section_text, DateRole::Start, WindowSide::Before);
            let end_date = self.role_date(&section_text, DateRole::End, WindowSide::Before);
            let issue_date = self
                .role_date(&section_text, DateRole::Issue, WindowSide::Before)
                .or_else(|| self.role_date(&section_text, DateRole::Issue, WindowSide::After))
                .or_else(|| self.last_span_date(&section_text));

            if start_date.is_none() && end_date.is_none() && issue_date.is_none() {
                debug!("section without any dated role discarded");
                continue;
            }

            let employer = self.employer(section);
            records.push(ExperienceRecord::new(
                source,
                employer,
                start_date,
                end_date,
                issue_date,
            ));
        }

        records
    }

    /// First date span whose keyword window contains a role keyword
    fn role_date(&self, text: &str, role: DateRole, side: WindowSide) -> Option<NaiveDate> {
        let keywords = self.locale.keywords(role);
        for m in DATE_SPAN.find_iter(text) {
            let window = match side {
                WindowSide::Before => window_before(text, m.start(), KEYWORD_WINDOW),
                WindowSide::After => window_after(text, m.end(), KEYWORD_WINDOW),
            };
            if keywords.iter().any(|k| window.contains(k)) {
                if let Some(date) = parse_date_span(m.as_str(), &self.locale) {
                    return Some(date);
                }
            }
        }
        None
    }

    /// Issuance fallback: the last date span in the section
    fn last_span_date(&self, text: &str) -> Option<NaiveDate> {
        let last = DATE_SPAN.find_iter(text).last()?;
        parse_date_span(last.as_str(), &self.locale)
    }

    /// Employer name from a hinted line, else the longest non-empty line.
    fn employer(&self, section: &Section) -> Option<String> {
        for line in &section.lines {
            let lowered = line.to_lowercase();
            if self
                .locale
                .employer_hints
                .iter()
                .any(|hint| lowered.contains(hint))
            {
                let cleaned = self.hint_strip.replace_all(line, "");
                let cleaned = cleaned.trim_matches([' ', '-', ':']);
                if !cleaned.is_empty() {
                    return Some(cleaned.to_string());
                }
            }
        }

        // Longest line, first occurrence winning ties
        let mut candidate: Option<&str> = None;
        for line in &section.lines {
            if line.is_empty() {
                continue;
            }
            let longer = candidate.map_or(true, |c| line.chars().count() > c.chars().count());
            if longer {
                candidate = Some(line);
            }
        }
        candidate.map(str::to_string)
    }
}

/// Up to `radius` characters immediately preceding byte offset `end`, lowercased.
///
/// Measured in characters, never splitting a UTF-8 boundary.
fn window_before(text: &str, end: usize, radius: usize) -> String {
    let prefix = &text[..end];
    let start = prefix
        .char_indices()
        .rev()
        .nth(radius.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    prefix[start..].to_lowercase()
}

/// Up to `radius` characters immediately following byte offset `start`, lowercased.
fn window_after(text: &str, start: usize, radius: usize) -> String {
    let suffix = &text[start..];
    let end = suffix
        .char_indices()
        .nth(radius)
        .map_or(suffix.len(), |(i, _)| i);
    suffix[..end].to_lowercase()
}

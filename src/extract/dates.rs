//! Multi-format date recognition.
//!
//! A date span is any substring matching one of the supported surface
//! syntaxes: numeric `D/M/Y` or `D-M-Y` with 2- or 4-digit years, ISO
//! `YYYY-MM-DD`, natural-language "D de Month de Y" (also the certificate
//! phrasing "D días del mes de Month de Y"), and "Month D, Y". Parsing is
//! total: a span that matches no syntax yields `None`, never an error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::locale::Locale;

/// Locates every candidate date span in a section's text
pub static DATE_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        \d{1,2}[/-]\d{1,2}[/-]\d{2,4}
        |
        \d{4}-\d{2}-\d{2}
        |
        \d{1,2}\s+(?:de\s+|d[ií]as\s+del\s+mes\s+de\s+)[a-záéíóúñ]+\s+de\s+\d{4}
        |
        [a-záéíóúñ]+\s+\d{1,2},\s*\d{4}
        ",
    )
    .expect("date span pattern is valid")
});

static NUMERIC_DMY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})$").expect("valid pattern"));

static NUMERIC_ISO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid pattern"));

static NATURAL_DAY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{1,2})\s+(?:de\s+|d[ií]as\s+del\s+mes\s+de\s+)([a-záéíóúñ]+)\s+de\s+(\d{4})$")
        .expect("valid pattern")
});

static NATURAL_MONTH_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-záéíóúñ]+)\s+(\d{1,2}),\s*(\d{4})$").expect("valid pattern")
});

/// Parse a recognized span into a calendar date.
///
/// Numeric syntaxes are tried before natural-language ones. Returns `None`
/// for anything unrecognized or out of calendar range.
#[must_use]
pub fn parse_date_span(span: &str, locale: &Locale) -> Option<NaiveDate> {
    let cleaned = span.trim();
    parse_numeric(cleaned).or_else(|| parse_natural(cleaned, locale))
}

fn parse_numeric(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = NUMERIC_DMY.captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year_digits = &caps[3];
        let year: i32 = year_digits.parse().ok()?;
        let year = match year_digits.len() {
            // Two-digit years: >= 50 resolves to the 1900s, else the 2000s
            2 => {
                if year >= 50 {
                    1900 + year
                } else {
                    2000 + year
                }
            }
            4 => year,
            _ => return None,
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = NUMERIC_ISO.captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

fn parse_natural(text: &str, locale: &Locale) -> Option<NaiveDate> {
    if let Some(caps) = NATURAL_DAY_FIRST.captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month = locale.month_number(&caps[2])?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = NATURAL_MONTH_FIRST.captures(text) {
        let month = locale.month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

//! Locale vocabulary tables driving extraction.
//!
//! Month names, role keywords, and employer hints are data, not code: adding
//! another locale means adding another constructor, never touching the
//! extraction logic in [`crate::extract::fields`].

/// Which employment fact a date is being extracted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRole {
    Start,
    End,
    Issue,
}

/// Vocabulary for one document locale.
///
/// All entries are lowercase; window text is lowercased before lookup.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Month names mapped to month numbers, including spelling variants
    pub months: &'static [(&'static str, u32)],
    /// Keywords that anchor a start-of-employment date
    pub start_keywords: &'static [&'static str],
    /// Keywords that anchor an end-of-employment date
    pub end_keywords: &'static [&'static str],
    /// Keywords that anchor a document issuance date
    pub issue_keywords: &'static [&'static str],
    /// Tokens hinting that a line names the employer
    pub employer_hints: &'static [&'static str],
}

impl Locale {
    /// Spanish-language work certificates and résumés.
    #[must_use]
    pub fn spanish() -> Self {
        Self {
            months: &[
                ("enero", 1),
                ("febrero", 2),
                ("marzo", 3),
                ("abril", 4),
                ("mayo", 5),
                ("junio", 6),
                ("julio", 7),
                ("agosto", 8),
                ("septiembre", 9),
                // Common alternate spelling
                ("setiembre", 9),
                ("octubre", 10),
                ("noviembre", 11),
                ("diciembre", 12),
            ],
            start_keywords: &[
                "ingreso",
                "inicio",
                "desde",
                "vinculación",
                "vinculo",
                "se vinculó",
            ],
            end_keywords: &[
                "retiro",
                "terminación",
                "hasta",
                "culminación",
                "finalización",
                "finalizo",
                "finalizó",
            ],
            issue_keywords: &["expedido", "expide", "emitido", "fecha de expedición"],
            employer_hints: &[
                "empresa",
                "entidad",
                "compañía",
                "compania",
                "organización",
                "organizacion",
                "institución",
                "institucion",
                "razón social",
                "razon social",
                "dependencia",
            ],
        }
    }

    /// Case-insensitive month-name lookup
    #[must_use]
    pub fn month_number(&self, name: &str) -> Option<u32> {
        let lowered = name.to_lowercase();
        self.months
            .iter()
            .find(|(n, _)| *n == lowered)
            .map(|(_, m)| *m)
    }

    /// Keyword list for a date role
    #[must_use]
    pub fn keywords(&self, role: DateRole) -> &'static [&'static str] {
        match role {
            DateRole::Start => self.start_keywords,
            DateRole::End => self.end_keywords,
            DateRole::Issue => self.issue_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lookup_case_insensitive() {
        let locale = Locale::spanish();
        assert_eq!(locale.month_number("enero"), Some(1));
        assert_eq!(locale.month_number("Enero"), Some(1));
        assert_eq!(locale.month_number("DICIEMBRE"), Some(12));
        assert_eq!(locale.month_number("brumaire"), None);
    }

    #[test]
    fn test_ninth_month_alternate_spelling() {
        let locale = Locale::spanish();
        assert_eq!(locale.month_number("septiembre"), Some(9));
        assert_eq!(locale.month_number("setiembre"), Some(9));
    }
}

//! Employer-name normalization applied before any comparison.

/// Normalize an employer name for grouping and similarity.
///
/// Case-folds, strips the locale's diacritics, drops everything that is not
/// alphanumeric or whitespace, and trims. Idempotent:
/// `normalize(normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize_employer(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(strip_diacritic)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

fn strip_diacritic(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casefold_and_diacritics() {
        assert_eq!(normalize_employer("Compañía Férrea"), "compania ferrea");
        assert_eq!(normalize_employer("EMPRESA ABC"), "empresa abc");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize_employer("Acme S.A.S."), "acme sas");
        assert_eq!(normalize_employer("  - Acme & Co. -  "), "acme  co");
    }

    #[test]
    fn test_idempotent() {
        for name in ["Compañía Férrea S.A.", "  ACME  ", "", "123 - Niño & Asociados"] {
            let once = normalize_employer(name);
            assert_eq!(normalize_employer(&once), once);
        }
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(normalize_employer(""), "");
        assert_eq!(normalize_employer("  ...  "), "");
    }
}

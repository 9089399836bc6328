//! Text-loading collaborator.
//!
//! The extraction engine consumes `(text, method)` pairs and does not care
//! how the text was produced. This module ships the plain-text loader; a
//! converter that renders binary documents (with an OCR fallback when the
//! text layer is absent) can slot in behind the same [`ExtractedText`]
//! contract. The core never retries or falls back itself.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("document not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How the text of a document was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Read from a text layer or a plain-text file
    Text,
    /// Recovered via optical character recognition
    Ocr,
}

impl std::fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Ocr => write!(f, "ocr"),
        }
    }
}

/// Raw text of one document plus how it was obtained
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub method: ExtractionMethod,
}

/// Load a plain-text document.
///
/// # Errors
///
/// Returns [`DocumentError::NotFound`] when the path does not exist and
/// [`DocumentError::Io`] when it cannot be read.
pub fn load_text(path: &Path) -> Result<ExtractedText, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ExtractedText {
        text,
        method: ExtractionMethod::Text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ingreso: 01/03/2020").unwrap();

        let extracted = load_text(file.path()).unwrap();
        assert_eq!(extracted.method, ExtractionMethod::Text);
        assert!(extracted.text.contains("Ingreso"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_text(Path::new("/no/such/document.txt")).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound(_)));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(ExtractionMethod::Text.to_string(), "text");
        assert_eq!(ExtractionMethod::Ocr.to_string(), "ocr");
    }
}

//! # exp-recon
//!
//! A library for extracting employment facts from free-form certificate and
//! résumé text, and reconciling the two sides to verify that claimed
//! experience is corroborated across both documents.
//!
//! Work certificates rarely share a layout: dates show up as `01/03/2020`,
//! `2020-03-01`, "3 de enero de 2020", or the notarial "a los 20 días del mes
//! de julio de 2021", and the employer may be named anywhere in the section.
//! `exp-recon` segments the raw text, recognizes date spans, assigns them to
//! roles (start, end, issuance) by keyword proximity, and then fuzzy-matches
//! the resulting records between certificates and the résumé.
//!
//! ## Features
//!
//! - **Multi-format date recognition**: numeric, ISO, and natural-language
//!   syntaxes with locale month tables
//! - **Keyword-proximity extraction**: dates are assigned to roles by the
//!   vocabulary found in a fixed window around each span
//! - **Fuzzy reconciliation**: normalized employer names scored by
//!   character-sequence similarity plus start-date closeness
//! - **Overlap merging**: same-employer records with overlapping ranges fold
//!   into fewer, longer records
//! - **Total results**: every input record yields exactly one result row;
//!   sparse or malformed text never raises
//!
//! ## Example
//!
//! ```rust
//! use exp_recon::extract::{FieldExtractor, Locale};
//! use exp_recon::recon::Reconciler;
//!
//! let extractor = FieldExtractor::new(Locale::spanish());
//!
//! let certs = extractor.extract(
//!     "Empresa: Acme S.A.\nIngreso: 01/02/2020\nRetiro: 30/06/2020",
//!     "certificate: acme.txt",
//! );
//! let cv = extractor.extract(
//!     "Empresa: Acme S.A.\nIngreso: 01/02/2020\nRetiro: 30/06/2020",
//!     "résumé: cv.txt",
//! );
//!
//! let results = Reconciler::new().reconcile(&certs, &cv);
//! assert!(results[0].start_date_match);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: experience records and comparison results
//! - [`extract`]: segmentation, date recognition, field extraction
//! - [`recon`]: normalization, similarity, merging, and the reconciler
//! - [`document`]: text-loading collaborator
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod document;
pub mod extract;
pub mod recon;

// Re-export commonly used types for convenience
pub use crate::core::comparison::{ComparisonResult, MatchDetails};
pub use crate::core::record::ExperienceRecord;
pub use crate::extract::fields::FieldExtractor;
pub use crate::extract::locale::Locale;
pub use crate::recon::engine::{MatchConfig, Reconciler, ScoringWeights};
pub use crate::recon::merge::merge_overlapping_records;

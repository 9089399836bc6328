//! Extraction engine: raw text to experience records.
//!
//! The pipeline is segmentation → date recognition → keyword-proximity field
//! assignment → record assembly:
//!
//! - [`section`]: split raw text on blank lines into candidate sections
//! - [`dates`]: recognize and parse multi-format date spans
//! - [`locale`]: month names, role keywords, and employer hints as data
//! - [`fields`]: assign dates to roles and locate the employer per section
//!
//! Extraction is best-effort and heuristic: unrecognized spans yield no date,
//! a missing employer yields `None`, and a section without any dated role is
//! dropped rather than reported as an error.
//!
//! ## Example
//!
//! ```rust
//! use exp_recon::extract::{FieldExtractor, Locale};
//!
//! let extractor = FieldExtractor::new(Locale::spanish());
//! let records = extractor.extract(
//!     "Empresa: Acme S.A.\nIngreso: 01/02/2020\nRetiro: 30/06/2020",
//!     "certificate: acme.txt",
//! );
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].employer.as_deref(), Some("Acme S.A."));
//! ```

pub mod dates;
pub mod fields;
pub mod locale;
pub mod section;

pub use fields::{FieldExtractor, KEYWORD_WINDOW};
pub use locale::{DateRole, Locale};
pub use section::{split_into_sections, Section};

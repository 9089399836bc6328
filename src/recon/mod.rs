//! Reconciliation engine: verifying certificate records against a résumé.
//!
//! - [`normalize`]: employer-name normalization shared by merging and scoring
//! - [`similarity`]: character-sequence similarity ratio
//! - [`merge`]: collapse same-employer records with overlapping ranges
//! - [`engine`]: pair scoring, greedy assignment, résumé-only rows
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use exp_recon::core::ExperienceRecord;
//! use exp_recon::recon::Reconciler;
//!
//! let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
//! let cert = ExperienceRecord::new(
//!     "certificate: abc.txt",
//!     Some("Empresa ABC".to_string()),
//!     Some(d(2020, 1, 1)),
//!     Some(d(2020, 12, 31)),
//!     None,
//! );
//! let cv = ExperienceRecord::new(
//!     "résumé: cv.txt",
//!     Some("Empresa ABC".to_string()),
//!     Some(d(2020, 1, 1)),
//!     Some(d(2020, 12, 31)),
//!     None,
//! );
//!
//! let results = Reconciler::new().reconcile(&[cert], &[cv]);
//! assert!(results[0].start_date_match);
//! ```

pub mod engine;
pub mod merge;
pub mod normalize;
pub mod similarity;

pub use engine::{MatchConfig, PairScore, Reconciler, ScoringWeights, DEFAULT_MIN_SCORE};
pub use merge::merge_overlapping_records;
pub use normalize::normalize_employer;
pub use similarity::similarity_ratio;

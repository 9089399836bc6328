//! Core value types shared by extraction and reconciliation.
//!
//! - [`ExperienceRecord`]: one claimed employment span with raw and derived dates
//! - [`ComparisonResult`]: the outcome of reconciling one certificate (or
//!   unmatched résumé) record against the résumé record set
//! - [`MatchDetails`]: classification of a reconciliation outcome
//!
//! Records carry two derived fields (`effective_end_date`, `experience_days`)
//! that are always consistent with the raw dates: construction computes them,
//! and [`ExperienceRecord::with_dates`] is the only way to change dates.

pub mod comparison;
pub mod record;

pub use comparison::{ComparisonResult, MatchDetails};
pub use record::ExperienceRecord;

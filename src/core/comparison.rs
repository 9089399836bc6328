use serde::{Deserialize, Serialize};

use crate::core::record::ExperienceRecord;

/// Classification of a reconciliation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDetails {
    /// Employer similarity and start dates within the confirmation window
    EmployerAndDate,
    /// Score cleared the threshold but the dates did not confirm
    Partial,
    /// No résumé entry scored above the threshold
    NoMatch,
    /// Résumé entry never consumed by any certificate
    ResumeOnly,
}

impl std::fmt::Display for MatchDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmployerAndDate => write!(f, "matched by employer and date"),
            Self::Partial => write!(f, "partial match"),
            Self::NoMatch => write!(f, "no match found in résumé"),
            Self::ResumeOnly => write!(f, "present only in résumé"),
        }
    }
}

/// Reconciliation outcome for one certificate record (or, for résumé-only
/// rows, a synthetic record built from the résumé entry's own fields).
///
/// One result is emitted per certificate record, matched or not, plus one per
/// résumé record never consumed as a match. Results are value objects:
/// constructed once, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Certificate-side record
    pub certificate: ExperienceRecord,

    /// Matched résumé-side record, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_entry: Option<ExperienceRecord>,

    /// True only for date-confirmed matches and for résumé-only rows
    pub start_date_match: bool,

    /// Outcome classification
    pub details: MatchDetails,
}

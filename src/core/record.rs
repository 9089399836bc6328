use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single claimed employment span extracted from a document.
///
/// The two derived fields are pure functions of the three raw dates and are
/// recomputed at construction; a record is never observed with derived fields
/// out of sync with its raw dates. Date changes go through [`Self::with_dates`],
/// which returns a fresh value rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    /// Provenance label (which document/section this came from)
    pub source: String,

    /// Employer name as it appeared in the text, unnormalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,

    /// Declared start of employment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Declared end of employment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Date the document itself was issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,

    /// Earliest non-null of `end_date`/`issue_date`; the latest date that can
    /// be safely counted as worked. `None` when `start_date` is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_end_date: Option<NaiveDate>,

    /// Inclusive day count between start and effective end, floored at 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_days: Option<i64>,
}

impl ExperienceRecord {
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        employer: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        issue_date: Option<NaiveDate>,
    ) -> Self {
        let effective_end_date = compute_effective_end(start_date, end_date, issue_date);
        let experience_days = compute_days(start_date, effective_end_date);

        Self {
            source: source.into(),
            employer,
            start_date,
            end_date,
            issue_date,
            effective_end_date,
            experience_days,
        }
    }

    /// Rebuild this record with new end/issue dates, recomputing derived fields.
    ///
    /// Returns a fresh value so records already handed out are never altered.
    #[must_use]
    pub fn with_dates(&self, end_date: Option<NaiveDate>, issue_date: Option<NaiveDate>) -> Self {
        Self::new(
            self.source.clone(),
            self.employer.clone(),
            self.start_date,
            end_date,
            issue_date,
        )
    }
}

/// Earliest non-null of end/issue; `None` when both are null or start is null.
fn compute_effective_end(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    issue_date: Option<NaiveDate>,
) -> Option<NaiveDate> {
    start_date?;
    match (end_date, issue_date) {
        (Some(e), Some(i)) => Some(e.min(i)),
        (Some(e), None) => Some(e),
        (None, Some(i)) => Some(i),
        (None, None) => None,
    }
}

/// Inclusive day count, floored at 0 when the end precedes the start.
fn compute_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<i64> {
    let (start, end) = (start?, end?);
    if end < start {
        return Some(0);
    }
    Some(end.signed_duration_since(start).num_days() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_effective_end_is_min_of_end_and_issue() {
        let rec = ExperienceRecord::new(
            "cert",
            Some("Empresa ABC".to_string()),
            Some(d(2020, 1, 1)),
            Some(d(2020, 12, 31)),
            Some(d(2020, 6, 30)),
        );
        assert_eq!(rec.effective_end_date, Some(d(2020, 6, 30)));
        assert_eq!(rec.experience_days, Some(182));
    }

    #[test]
    fn test_effective_end_single_candidate() {
        let rec = ExperienceRecord::new("cert", None, Some(d(2020, 1, 1)), Some(d(2020, 3, 1)), None);
        assert_eq!(rec.effective_end_date, Some(d(2020, 3, 1)));

        let rec = ExperienceRecord::new("cert", None, Some(d(2020, 1, 1)), None, Some(d(2020, 2, 1)));
        assert_eq!(rec.effective_end_date, Some(d(2020, 2, 1)));
    }

    #[test]
    fn test_effective_end_requires_start() {
        let rec = ExperienceRecord::new("cert", None, None, Some(d(2020, 12, 31)), None);
        assert_eq!(rec.effective_end_date, None);
        assert_eq!(rec.experience_days, None);
    }

    #[test]
    fn test_effective_end_none_when_both_missing() {
        let rec = ExperienceRecord::new("cert", None, Some(d(2020, 1, 1)), None, None);
        assert_eq!(rec.effective_end_date, None);
        assert_eq!(rec.experience_days, None);
    }

    #[test]
    fn test_days_floored_at_zero() {
        // Issue date before the start date: subtraction would be negative
        let rec = ExperienceRecord::new("cert", None, Some(d(2020, 6, 1)), None, Some(d(2020, 1, 1)));
        assert_eq!(rec.experience_days, Some(0));
    }

    #[test]
    fn test_single_day_counts_one() {
        let rec = ExperienceRecord::new("cert", None, Some(d(2020, 1, 1)), Some(d(2020, 1, 1)), None);
        assert_eq!(rec.experience_days, Some(1));
    }

    #[test]
    fn test_with_dates_recomputes_derived() {
        let rec = ExperienceRecord::new("cert", None, Some(d(2020, 1, 1)), Some(d(2020, 1, 31)), None);
        assert_eq!(rec.experience_days, Some(31));

        let extended = rec.with_dates(Some(d(2020, 3, 31)), None);
        assert_eq!(extended.experience_days, Some(91));
        // Original value untouched
        assert_eq!(rec.experience_days, Some(31));
    }
}

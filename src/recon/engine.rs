//! Reconciliation engine: certificate records against résumé records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::comparison::{ComparisonResult, MatchDetails};
use crate::core::record::ExperienceRecord;
use crate::recon::normalize::normalize_employer;
use crate::recon::similarity::similarity_ratio;

/// Default minimum combined score for accepting a match
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Start dates at most this many days apart are date-confirmed
pub const START_DATE_WINDOW_DAYS: i64 = 7;

/// Neutral day gap assumed when either start date is missing
const NEUTRAL_GAP_DAYS: f64 = 60.0;

/// Source label given to synthetic certificate records for résumé-only rows
pub const RESUME_SOURCE_LABEL: &str = "résumé";

/// Configurable weights for the two scoring components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for employer-name similarity
    pub name_similarity: f64,
    /// Weight for start-date closeness
    pub date_closeness: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name_similarity: 0.7, // 70%
            date_closeness: 0.3,  // 30%
        }
    }
}

impl ScoringWeights {
    /// Normalize weights to sum to 1.0
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.name_similarity + self.date_closeness;
        if total <= 0.0 {
            return Self::default();
        }
        Self {
            name_similarity: self.name_similarity / total,
            date_closeness: self.date_closeness / total,
        }
    }
}

/// Configuration for the reconciliation engine
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Minimum combined score for accepting a match
    pub min_score: f64,
    /// Scoring weights
    pub scoring_weights: ScoringWeights,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            scoring_weights: ScoringWeights::default(),
        }
    }
}

/// Component scores for one (certificate, résumé) pair
#[derive(Debug, Clone)]
pub struct PairScore {
    /// Employer-name similarity over normalized names, in [0, 1]
    pub similarity: f64,
    /// Start-date closeness, in (0, 1]
    pub date_closeness: f64,
    /// Weighted combined score
    pub combined: f64,
    /// True when both start dates are present and within the window
    pub start_date_match: bool,
}

impl PairScore {
    /// Score a candidate pair.
    #[must_use]
    pub fn calculate(
        certificate: &ExperienceRecord,
        cv_entry: &ExperienceRecord,
        weights: &ScoringWeights,
    ) -> Self {
        let similarity = similarity_ratio(
            &normalize_employer(certificate.employer.as_deref().unwrap_or("")),
            &normalize_employer(cv_entry.employer.as_deref().unwrap_or("")),
        );

        let start_gap = date_gap_days(certificate.start_date, cv_entry.start_date);
        let start_date_match = start_gap.is_some_and(|gap| gap <= START_DATE_WINDOW_DAYS);

        #[allow(clippy::cast_precision_loss)]
        let date_closeness = if start_date_match {
            1.0
        } else {
            let gap = start_gap.map_or(NEUTRAL_GAP_DAYS, |g| g as f64);
            1.0 / (1.0 + gap / 30.0)
        };

        let norm = weights.normalized();
        let combined = norm.name_similarity * similarity + norm.date_closeness * date_closeness;

        Self {
            similarity,
            date_closeness,
            combined,
            start_date_match,
        }
    }
}

/// Absolute day difference when both dates are present
fn date_gap_days(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<i64> {
    let (a, b) = (a?, b?);
    Some(a.signed_duration_since(b).num_days().abs())
}

/// Greedy single-pass reconciler.
///
/// Certificates are processed in input order; each takes the unconsumed
/// résumé record with the highest combined score (the earliest on an exact
/// tie), provided it clears the threshold. This is deliberately not a global optimum over all pairs: a
/// later certificate cannot reclaim a résumé record already consumed by an
/// earlier, weaker match. Substituting a bipartite maximum-weight assignment
/// over the same score function remains an open option.
pub struct Reconciler {
    config: MatchConfig,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler {
    /// Engine with default weights and threshold
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    /// Engine with custom configuration
    #[must_use]
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Reconcile certificate records against résumé records.
    ///
    /// Emits one result per certificate record (matched or not), then one
    /// synthetic result per résumé record never consumed as a match. Never
    /// fails: sparse or empty inputs produce explicit unmatched rows.
    #[must_use]
    pub fn reconcile(
        &self,
        certificates: &[ExperienceRecord],
        cv_entries: &[ExperienceRecord],
    ) -> Vec<ComparisonResult> {
        let mut results = Vec::with_capacity(certificates.len());
        let mut consumed = vec![false; cv_entries.len()];

        for certificate in certificates {
            // Strictly-greater comparison keeps the earliest entry on ties
            let mut best: Option<(usize, PairScore)> = None;
            for (idx, entry) in cv_entries.iter().enumerate() {
                if consumed[idx] {
                    continue;
                }
                let score = PairScore::calculate(certificate, entry, &self.config.scoring_weights);
                if best.as_ref().map_or(true, |(_, b)| score.combined > b.combined) {
                    best = Some((idx, score));
                }
            }

            match best {
                Some((idx, score)) if score.combined > self.config.min_score => {
                    debug!(
                        certificate = %certificate.source,
                        score = score.combined,
                        "accepted match"
                    );
                    consumed[idx] = true;
                    results.push(ComparisonResult {
                        certificate: certificate.clone(),
                        cv_entry: Some(cv_entries[idx].clone()),
                        start_date_match: score.start_date_match,
                        details: if score.start_date_match {
                            MatchDetails::EmployerAndDate
                        } else {
                            MatchDetails::Partial
                        },
                    });
                }
                _ => {
                    results.push(ComparisonResult {
                        certificate: certificate.clone(),
                        cv_entry: None,
                        start_date_match: false,
                        details: MatchDetails::NoMatch,
                    });
                }
            }
        }

        // Unconsumed résumé entries become informational rows
        for (idx, entry) in cv_entries.iter().enumerate() {
            if consumed[idx] {
                continue;
            }
            results.push(ComparisonResult {
                certificate: ExperienceRecord::new(
                    RESUME_SOURCE_LABEL,
                    entry.employer.clone(),
                    entry.start_date,
                    entry.end_date,
                    None,
                ),
                cv_entry: Some(entry.clone()),
                start_date_match: true,
                details: MatchDetails::ResumeOnly,
            });
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(source: &str, employer: &str, start: NaiveDate, end: NaiveDate) -> ExperienceRecord {
        ExperienceRecord::new(source, Some(employer.to_string()), Some(start), Some(end), None)
    }

    #[test]
    fn test_identical_employer_and_dates_match() {
        let cert = rec("cert", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));
        let cv = rec("cv", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));

        let score = PairScore::calculate(&cert, &cv, &ScoringWeights::default());
        assert!(score.start_date_match);
        assert!(score.combined > DEFAULT_MIN_SCORE);
        assert!((score.combined - 1.0).abs() < 1e-9);

        let results = Reconciler::new().reconcile(&[cert], &[cv]);
        assert_eq!(results.len(), 1);
        assert!(results[0].start_date_match);
        assert_eq!(results[0].details, MatchDetails::EmployerAndDate);
        assert!(results[0].cv_entry.is_some());
    }

    #[test]
    fn test_close_start_dates_within_window_confirm() {
        let cert = rec("cert", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));
        let cv = rec("cv", "Empresa ABC", d(2020, 1, 8), d(2020, 12, 31));

        let score = PairScore::calculate(&cert, &cv, &ScoringWeights::default());
        assert!(score.start_date_match);
        assert!((score.date_closeness - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distant_start_dates_partial_match() {
        let cert = rec("cert", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));
        let cv = rec("cv", "Empresa ABC", d(2020, 3, 1), d(2020, 12, 31));

        let results = Reconciler::new().reconcile(&[cert], &[cv]);
        assert_eq!(results.len(), 1);
        assert!(!results[0].start_date_match);
        assert_eq!(results[0].details, MatchDetails::Partial);
    }

    #[test]
    fn test_missing_start_uses_neutral_gap() {
        let cert = ExperienceRecord::new("cert", Some("Empresa ABC".into()), None, None, None);
        let cv = rec("cv", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));

        let score = PairScore::calculate(&cert, &cv, &ScoringWeights::default());
        assert!(!score.start_date_match);
        // 1 / (1 + 60/30) = 1/3
        assert!((score.date_closeness - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_match_below_threshold() {
        let cert = rec("cert", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));
        let cv = rec("cv", "Zyx Qwerty Corp", d(2005, 6, 1), d(2006, 6, 1));

        let results = Reconciler::new().reconcile(&[cert], &[cv]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].details, MatchDetails::NoMatch);
        assert!(results[0].cv_entry.is_none());
        assert_eq!(results[1].details, MatchDetails::ResumeOnly);
    }

    #[test]
    fn test_resume_only_synthetic_row() {
        let cv = rec("cv", "Empresa Sin Certificado", d(2019, 1, 1), d(2019, 12, 31));

        let results = Reconciler::new().reconcile(&[], &[cv.clone()]);
        assert_eq!(results.len(), 1);

        let row = &results[0];
        assert_eq!(row.details, MatchDetails::ResumeOnly);
        assert!(row.start_date_match);
        assert_eq!(row.certificate.source, RESUME_SOURCE_LABEL);
        assert_eq!(row.certificate.employer, cv.employer);
        assert_eq!(row.certificate.start_date, cv.start_date);
        assert_eq!(row.cv_entry.as_ref().unwrap().source, "cv");
    }

    #[test]
    fn test_consumed_entry_not_reclaimed() {
        let cert_a = rec("cert-a", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));
        let cert_b = rec("cert-b", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));
        let cv = rec("cv", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));

        let results = Reconciler::new().reconcile(&[cert_a, cert_b], &[cv]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].details, MatchDetails::EmployerAndDate);
        // Second certificate cannot take the already-consumed entry
        assert_eq!(results[1].details, MatchDetails::NoMatch);
    }

    #[test]
    fn test_tie_between_candidates_keeps_first() {
        let cert = rec("cert", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));
        let first = rec("cv-1", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));
        let second = rec("cv-2", "Empresa ABC", d(2020, 1, 1), d(2020, 12, 31));

        let results = Reconciler::new().reconcile(&[cert], &[first, second]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].cv_entry.as_ref().unwrap().source, "cv-1");
        // The duplicate surfaces as a résumé-only row
        assert_eq!(results[1].details, MatchDetails::ResumeOnly);
        assert_eq!(results[1].cv_entry.as_ref().unwrap().source, "cv-2");
    }

    #[test]
    fn test_one_row_per_input_record() {
        let certs = vec![
            rec("c1", "Alpha", d(2018, 1, 1), d(2018, 12, 31)),
            rec("c2", "Beta", d(2019, 1, 1), d(2019, 12, 31)),
        ];
        let cvs = vec![
            rec("cv", "Alpha", d(2018, 1, 1), d(2018, 12, 31)),
            rec("cv", "Gamma", d(2021, 1, 1), d(2021, 12, 31)),
        ];

        let results = Reconciler::new().reconcile(&certs, &cvs);
        // Two certificate rows plus one résumé-only row
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_weights_normalize() {
        let weights = ScoringWeights {
            name_similarity: 7.0,
            date_closeness: 3.0,
        };
        let norm = weights.normalized();
        assert!((norm.name_similarity - 0.7).abs() < 1e-9);
        assert!((norm.date_closeness - 0.3).abs() < 1e-9);

        let degenerate = ScoringWeights {
            name_similarity: 0.0,
            date_closeness: 0.0,
        };
        let norm = degenerate.normalized();
        assert!((norm.name_similarity - 0.7).abs() < 1e-9);
    }
}

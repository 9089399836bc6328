//! Collapsing same-employer records with overlapping date ranges.
//!
//! Multiple sections of one document often describe a single engagement
//! (e.g., a certificate listing contract renewals). Before reconciliation the
//! caller may fold those into fewer, longer records.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::record::ExperienceRecord;
use crate::recon::normalize::normalize_employer;

/// Merge records sharing a normalized employer and overlapping date ranges.
///
/// Records are grouped by normalized employer (missing employers share the
/// empty key), sorted within each group by start date with a sentinel minimum for
/// missing starts (stable, so original order breaks ties), then folded
/// sequentially: the running record absorbs the next one when both starts and
/// the running effective end are present and `next.start <= running.effective_end`.
/// Absorption extends end/issue dates to the later-reaching values through a
/// pure reconstruction; an already-emitted record is never altered.
#[must_use]
pub fn merge_overlapping_records(records: Vec<ExperienceRecord>) -> Vec<ExperienceRecord> {
    // Explicit ordered map: group order follows first appearance
    let mut groups: Vec<(String, Vec<ExperienceRecord>)> = Vec::new();
    for record in records {
        let key = normalize_employer(record.employer.as_deref().unwrap_or(""));
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, items)) => items.push(record),
            None => groups.push((key, vec![record])),
        }
    }

    let mut merged = Vec::new();
    for (key, mut items) in groups {
        items.sort_by_key(|r| r.start_date.unwrap_or(NaiveDate::MIN));

        let mut iter = items.into_iter();
        let Some(mut current) = iter.next() else {
            continue;
        };

        for next in iter {
            let overlaps = current.start_date.is_some()
                && next.start_date.is_some()
                && current
                    .effective_end_date
                    .is_some_and(|end| next.start_date.is_some_and(|s| s <= end));

            if overlaps {
                // Absorb: extend only when the next record reaches later
                let extends = next.effective_end_date.is_some()
                    && (current.effective_end_date.is_none()
                        || next.effective_end_date > current.effective_end_date);
                if extends {
                    debug!(employer = %key, "absorbing overlapping record");
                    current = current.with_dates(
                        next.end_date.or(current.end_date),
                        next.issue_date.or(current.issue_date),
                    );
                }
            } else {
                merged.push(current);
                current = next;
            }
        }
        merged.push(current);
    }

    merged
}

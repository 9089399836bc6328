use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::extract::fmt_date;
use crate::cli::OutputFormat;
use crate::core::comparison::ComparisonResult;
use crate::core::record::ExperienceRecord;
use crate::document;
use crate::extract::{FieldExtractor, Locale};
use crate::recon::engine::{MatchConfig, Reconciler, ScoringWeights};
use crate::recon::merge_overlapping_records;

#[derive(Args)]
pub struct VerifyArgs {
    /// Certificate documents (plain text), one or more
    #[arg(required = true, num_args = 1..)]
    pub certificates: Vec<PathBuf>,

    /// Résumé document to verify against
    #[arg(long, required = true)]
    pub cv: PathBuf,

    /// Collapse same-employer records with overlapping date ranges before
    /// reconciling
    #[arg(long)]
    pub merge: bool,

    // === Scoring options ===
    /// Weight for employer-name similarity (0-100, default 70)
    #[arg(long, default_value = "70", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_name: u32,

    /// Weight for start-date closeness (0-100, default 30)
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_date: u32,

    /// Minimum combined score for accepting a match
    #[arg(long, default_value = "0.3")]
    pub min_score: f64,
}

/// Execute verify subcommand
///
/// # Errors
///
/// Returns an error if any input document cannot be loaded.
pub fn run(args: &VerifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let extractor = FieldExtractor::new(Locale::spanish());

    let mut certificates = Vec::new();
    for path in &args.certificates {
        certificates.extend(load_records(&extractor, path, "certificate", verbose)?);
    }
    let cv_entries = load_records(&extractor, &args.cv, "résumé", verbose)?;

    let (certificates, cv_entries) = if args.merge {
        (
            merge_overlapping_records(certificates),
            merge_overlapping_records(cv_entries),
        )
    } else {
        (certificates, cv_entries)
    };

    if verbose {
        eprintln!(
            "Reconciling {} certificate records against {} résumé records",
            certificates.len(),
            cv_entries.len()
        );
    }

    let scoring_weights = ScoringWeights {
        name_similarity: f64::from(args.weight_name) / 100.0,
        date_closeness: f64::from(args.weight_date) / 100.0,
    };
    let config = MatchConfig {
        min_score: args.min_score,
        scoring_weights,
    };
    let results = Reconciler::with_config(config).reconcile(&certificates, &cv_entries);

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn load_records(
    extractor: &FieldExtractor,
    path: &Path,
    kind: &str,
    verbose: bool,
) -> anyhow::Result<Vec<ExperienceRecord>> {
    let extracted = document::load_text(path)?;

    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let label = format!("{kind}: {name}");

    let records = extractor.extract(&extracted.text, &label);
    if verbose {
        eprintln!(
            "{}: {} records (method: {})",
            path.display(),
            records.len(),
            extracted.method
        );
    }
    if records.is_empty() {
        tracing::warn!(path = %path.display(), "no experience records found");
    }

    Ok(records)
}

const HEADERS: [&str; 12] = [
    "Source",
    "Employer",
    "Start (cert)",
    "End (cert)",
    "Issued",
    "Effective end",
    "Days",
    "Date match",
    "Employer (CV)",
    "Start (CV)",
    "End (CV)",
    "Details",
];

fn result_row(result: &ComparisonResult) -> Vec<String> {
    let cert = &result.certificate;
    let cv = result.cv_entry.as_ref();
    vec![
        cert.source.clone(),
        cert.employer.clone().unwrap_or_default(),
        fmt_date(cert.start_date),
        fmt_date(cert.end_date),
        fmt_date(cert.issue_date),
        fmt_date(cert.effective_end_date),
        cert.experience_days.map_or(String::new(), |d| d.to_string()),
        if result.start_date_match && cv.is_some() {
            "yes".to_string()
        } else {
            "no".to_string()
        },
        cv.and_then(|e| e.employer.clone()).unwrap_or_default(),
        cv.map_or_else(|| "-".to_string(), |e| fmt_date(e.start_date)),
        cv.map_or_else(|| "-".to_string(), |e| fmt_date(e.end_date)),
        result.details.to_string(),
    ]
}

fn print_text_results(results: &[ComparisonResult]) {
    let total_days: i64 = results
        .iter()
        .filter_map(|r| r.certificate.experience_days)
        .sum();

    let mut rows: Vec<Vec<String>> = vec![HEADERS.iter().map(ToString::to_string).collect()];
    rows.extend(results.iter().map(result_row));

    let mut total_row = vec![String::new(); HEADERS.len()];
    total_row[5] = "Total".to_string();
    total_row[6] = total_days.to_string();
    rows.push(total_row);

    let widths = column_widths(&rows);
    print_row(&rows[0], &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&separator, &widths);
    for row in &rows[1..] {
        print_row(row, &widths);
    }
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = vec![0usize; rows[0].len()];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    widths
}

fn print_row(row: &[String], widths: &[usize]) {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    println!("| {} |", cells.join(" | "));
}

fn print_json_results(results: &[ComparisonResult]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|r| {
            let cert = &r.certificate;
            let cv = r.cv_entry.as_ref();
            serde_json::json!({
                "source": cert.source,
                "employer": cert.employer,
                "start_date": cert.start_date,
                "end_date": cert.end_date,
                "issue_date": cert.issue_date,
                "effective_end_date": cert.effective_end_date,
                "experience_days": cert.experience_days,
                "start_date_match": r.start_date_match && cv.is_some(),
                "cv_employer": cv.and_then(|e| e.employer.clone()),
                "cv_start_date": cv.and_then(|e| e.start_date),
                "cv_end_date": cv.and_then(|e| e.end_date),
                "details": r.details.to_string(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[ComparisonResult]) {
    println!(
        "source\temployer\tstart_date\tend_date\tissue_date\teffective_end_date\texperience_days\tstart_date_match\tcv_employer\tcv_start_date\tcv_end_date\tdetails"
    );
    for result in results {
        println!("{}", result_row(result).join("\t"));
    }
}

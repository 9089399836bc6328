use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::record::ExperienceRecord;
use crate::document;
use crate::extract::{FieldExtractor, Locale};
use crate::recon::merge_overlapping_records;

#[derive(Args)]
pub struct ExtractArgs {
    /// Input document (plain text)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Provenance label for the extracted records (defaults to the file name)
    #[arg(long)]
    pub source_label: Option<String>,

    /// Collapse same-employer records with overlapping date ranges
    #[arg(long)]
    pub merge: bool,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error if the input document cannot be loaded.
pub fn run(args: &ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let extracted = document::load_text(&args.input)?;

    if verbose {
        eprintln!(
            "Loaded {} ({} chars, method: {})",
            args.input.display(),
            extracted.text.chars().count(),
            extracted.method
        );
    }

    let label = args.source_label.clone().unwrap_or_else(|| {
        args.input
            .file_name()
            .map_or_else(|| args.input.display().to_string(), |n| n.to_string_lossy().into_owned())
    });

    let extractor = FieldExtractor::new(Locale::spanish());
    let mut records = extractor.extract(&extracted.text, &label);

    if args.merge {
        let before = records.len();
        records = merge_overlapping_records(records);
        if verbose && records.len() < before {
            eprintln!("Merged {} records into {}", before, records.len());
        }
    }

    if records.is_empty() {
        eprintln!("No experience records found in {}", args.input.display());
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_records(&records),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Tsv => print_tsv_records(&records),
    }

    Ok(())
}

fn print_text_records(records: &[ExperienceRecord]) {
    for (i, rec) in records.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n#{} {}", i + 1, rec.employer.as_deref().unwrap_or("(no employer)"));
        println!("   Source: {}", rec.source);
        println!("   Start: {}", fmt_date(rec.start_date));
        println!("   End: {}", fmt_date(rec.end_date));
        println!("   Issued: {}", fmt_date(rec.issue_date));
        println!("   Effective end: {}", fmt_date(rec.effective_end_date));
        match rec.experience_days {
            Some(days) => println!("   Days: {days}"),
            None => println!("   Days: -"),
        }
    }

    println!();
}

fn print_tsv_records(records: &[ExperienceRecord]) {
    println!("source\temployer\tstart_date\tend_date\tissue_date\teffective_end_date\texperience_days");
    for rec in records {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            rec.source,
            rec.employer.as_deref().unwrap_or(""),
            fmt_date(rec.start_date),
            fmt_date(rec.end_date),
            fmt_date(rec.issue_date),
            fmt_date(rec.effective_end_date),
            rec.experience_days.map_or(String::new(), |d| d.to_string()),
        );
    }
}

pub(crate) fn fmt_date(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

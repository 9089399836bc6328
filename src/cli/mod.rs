//! Command-line interface for exp-recon.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Extract experience records from one document
//! - **verify**: Reconcile certificate documents against a résumé
//!
//! ## Usage
//!
//! ```text
//! # Show what the extractor finds in a certificate
//! exp-recon extract cert_acme.txt
//!
//! # Verify certificates against a résumé, collapsing renewals first
//! exp-recon verify cert_a.txt cert_b.txt --cv resume.txt --merge
//!
//! # JSON output for scripting
//! exp-recon verify cert_a.txt --cv resume.txt --format json
//! ```

use clap::{Parser, Subcommand};

pub mod extract;
pub mod verify;

#[derive(Parser)]
#[command(name = "exp-recon")]
#[command(version)]
#[command(about = "Verify claimed work experience by reconciling certificates against a résumé")]
#[command(
    long_about = "exp-recon extracts employment facts (employer, start, end, and issuance dates)\nfrom free-form certificate and résumé text, then reconciles the two sides:\nemployer names are normalized and fuzzy-matched, start dates are compared,\nand every record ends up in exactly one result row — matched, unmatched, or\npresent only in the résumé."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract experience records from a single document
    Extract(extract::ExtractArgs),

    /// Reconcile certificate documents against a résumé
    Verify(verify::VerifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

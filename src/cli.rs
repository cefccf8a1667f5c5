use std::path::{Path, PathBuf};

use clap::Parser;

use crate::concordance::pairwise_concordance;
use crate::error::Result;
use crate::extract::{Extraction, extract_calls};
use crate::output::{write_concordance_report, write_sample_calls};
use crate::reader::{RawExport, read_genotype_matrix};

/// Extract one sample's genotype calls from an Axiom export.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct ExtractArgs {
    /// Raw export (.txt/.tsv with optional "##" metadata lines, or .xlsx/.xls).
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Tab-delimited output, one column headed by the sample id.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

/// Compute pairwise genotype concordance between samples in a joined matrix.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct ConcordanceArgs {
    /// Tab-delimited matrix: marker ids in the first column, one column per sample.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Report with one "<a> vs <b> similarity=<pct>%" line per sample pair.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

pub fn run_extract(input: &Path, output: &Path) -> Result<Extraction> {
    println!("Processing file: {}", input.display());

    let export = RawExport::from_path(input);
    let (table, parse_path) = export.load()?;
    let extraction = extract_calls(&table, export.path(), parse_path)?;

    write_sample_calls(&extraction.calls, output)?;
    println!("Output saved to: {}", output.display());
    if !extraction.calls.calls.is_empty() {
        let head: Vec<&str> = extraction
            .calls
            .calls
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        println!("First few genotype calls: {head:?}");
    }
    Ok(extraction)
}

pub fn run_concordance(input: &Path, output: &Path) -> Result<()> {
    let matrix = read_genotype_matrix(input)?;
    println!(
        "Read {} markers x {} samples from {}",
        matrix.n_markers(),
        matrix.n_samples(),
        input.display()
    );

    let records = pairwise_concordance(&matrix)?;
    println!(
        "Writing {} pairwise similarities to {}...",
        records.len(),
        output.display()
    );
    write_concordance_report(&records, output)?;
    Ok(())
}

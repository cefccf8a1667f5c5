use std::fmt;

use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;

use crate::error::Result;
use crate::model::{GenotypeMatrix, MISSING_CODE};

/// Agreement between two samples over the markers both have called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcordanceRecord {
    pub sample_a: String,
    pub sample_b: String,
    pub matches: u64,
    /// Markers where neither sample is missing.
    pub total: u64,
}

impl ConcordanceRecord {
    /// Percentage of shared markers with identical calls.
    ///
    /// A pair with no shared non-missing markers reports `0.0`, not "undefined",
    /// so every pair still gets a well-formed report line.
    pub fn similarity(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matches as f64 / self.total as f64 * 100.0
        }
    }
}

impl fmt::Display for ConcordanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} similarity={:.0}%",
            self.sample_a,
            self.sample_b,
            self.similarity()
        )
    }
}

/// Compare samples `a` and `b` over rows where both have a call.
pub fn compare_pair(matrix: &GenotypeMatrix, a: usize, b: usize) -> ConcordanceRecord {
    let mut matches = 0;
    let mut total = 0;
    for (&x, &y) in matrix.codes(a).iter().zip(matrix.codes(b).iter()) {
        if x == MISSING_CODE || y == MISSING_CODE {
            continue;
        }
        total += 1;
        matches += (x == y) as u64;
    }
    ConcordanceRecord {
        sample_a: matrix.samples()[a].clone(),
        sample_b: matrix.samples()[b].clone(),
        matches,
        total,
    }
}

/// One record per unordered sample pair, in column order: (0,1), (0,2), ..., (1,2), ...
pub fn pairwise_concordance(matrix: &GenotypeMatrix) -> Result<Vec<ConcordanceRecord>> {
    let n_samples = matrix.n_samples();
    let n_pairs = n_samples * n_samples.saturating_sub(1) / 2;
    let pb = ProgressBar::new(n_pairs as u64);
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:30} {pos}/{len} pairs",
    )?);

    let mut records = Vec::with_capacity(n_pairs);
    for (a, b) in (0..n_samples).tuple_combinations::<(usize, usize)>() {
        records.push(compare_pair(matrix, a, b));
        pb.inc(1);
    }
    pb.abandon();
    Ok(records)
}

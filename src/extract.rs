use std::path::Path;

use crate::error::{CustomError, Result};
use crate::model::{SampleCalls, Table, is_missing_call};
use crate::reader::ParsePath;

pub const CALL_CODE_SUFFIX: &str = ".CEL_call_code";

/// Sample id carried by a call-code column name: everything before a
/// trailing `.CEL_call_code` (any case). The prefix must be non-empty.
pub fn sample_id_from_header(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(CALL_CODE_SUFFIX.len())?;
    let suffix = name.get(split..)?;
    if split == 0 || !suffix.eq_ignore_ascii_case(CALL_CODE_SUFFIX) {
        return None;
    }
    name.get(..split)
}

/// Index of the first call-code column in `header`.
pub fn find_call_code_column(header: &[String]) -> Option<usize> {
    header
        .iter()
        .position(|name| sample_id_from_header(name).is_some())
}

/// Sample id taken from a file name: extension dropped, `.CEL` removed.
pub fn sample_id_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(".CEL", ""))
        .unwrap_or_default()
}

/// What a single extractor run found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub column: String,
    pub calls: SampleCalls,
    pub rows_before: usize,
    pub parse_path: ParsePath,
}

impl Extraction {
    pub fn rows_after(&self) -> usize {
        self.calls.calls.len()
    }

    pub fn rows_removed(&self) -> usize {
        self.rows_before - self.rows_after()
    }
}

/// Project the call-code column out of `table`, dropping missing calls.
pub fn extract_calls(table: &Table, source: &Path, parse_path: ParsePath) -> Result<Extraction> {
    println!("Columns: {:?}", table.header);
    let column_idx =
        find_call_code_column(&table.header).ok_or_else(|| CustomError::ColumnNotFound {
            available: table.header.clone(),
        })?;
    let column = table.header[column_idx].clone();
    println!("Found genotype column: {column}");

    let sample_id = match sample_id_from_header(&column) {
        Some(id) => id.to_string(),
        None => sample_id_from_path(source),
    };
    println!("Sample ID: {sample_id}");

    let calls: Vec<String> = table
        .column(column_idx)
        .filter(|call| !is_missing_call(call))
        .map(str::to_string)
        .collect();

    let extraction = Extraction {
        column,
        calls: SampleCalls { sample_id, calls },
        rows_before: table.n_rows(),
        parse_path,
    };
    println!(
        "Rows: {} -> {} (removed {} missing)",
        extraction.rows_before,
        extraction.rows_after(),
        extraction.rows_removed()
    );
    Ok(extraction)
}

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{CustomError, Result};
use crate::model::Table;

const METADATA_PREFIX: &str = "##";
const DELIMITER: u8 = b'\t';

/// How the tabular block of a raw export was recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Rectangular block read in one pass.
    Success(Table),
    /// Strict read failed; rows whose width differs from the header were dropped.
    PartialRecovered { table: Table, discarded_rows: usize },
    /// Neither pass produced a header and at least one row.
    Failed { reason: String },
}

/// Which parse produced a table, with what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePath {
    Strict,
    Relaxed { discarded_rows: usize },
}

impl ParseOutcome {
    /// Split into the recovered table and how it was recovered, or the failure reason.
    pub fn into_table(self) -> std::result::Result<(Table, ParsePath), String> {
        match self {
            ParseOutcome::Success(table) => Ok((table, ParsePath::Strict)),
            ParseOutcome::PartialRecovered {
                table,
                discarded_rows,
            } => Ok((table, ParsePath::Relaxed { discarded_rows })),
            ParseOutcome::Failed { reason } => Err(reason),
        }
    }

    pub fn discarded_rows(&self) -> usize {
        match self {
            ParseOutcome::PartialRecovered { discarded_rows, .. } => *discarded_rows,
            _ => 0,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParseOutcome::Success(_) => "success",
            ParseOutcome::PartialRecovered { .. } => "partially recovered",
            ParseOutcome::Failed { .. } => "failed",
        }
    }
}

/// The part of a raw export left after the leading `##` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanBlock<'a> {
    /// 0-based line index of the header row.
    pub data_start: usize,
    pub n_lines: usize,
    pub text: &'a str,
}

impl CleanBlock<'_> {
    pub fn header_line(&self) -> &str {
        self.text
            .lines()
            .next()
            .unwrap_or_default()
            .trim_end_matches('\r')
    }
}

/// Split off leading metadata lines. Returns `None` when no header followed
/// by at least one more line remains.
pub fn strip_metadata(content: &str) -> Option<CleanBlock<'_>> {
    let mut offset = 0;
    let mut data_start = None;
    let mut n_lines = 0;
    for (idx, line) in content.split_inclusive('\n').enumerate() {
        n_lines += 1;
        if data_start.is_none() {
            if line.trim_start().starts_with(METADATA_PREFIX) {
                offset += line.len();
            } else {
                data_start = Some(idx);
            }
        }
    }

    let data_start = data_start?;
    if data_start + 1 >= n_lines {
        return None;
    }
    Some(CleanBlock {
        data_start,
        n_lines,
        text: &content[offset..],
    })
}

/// Read a text export, drop its metadata lines and parse what remains.
pub fn read_text_export(path: &Path) -> Result<ParseOutcome> {
    read_text_export_in(path, &std::env::temp_dir())
}

/// Like [`read_text_export`], staging the clean block in `staging_dir`.
///
/// The staged file is removed when this function returns, whichever way it
/// returns.
pub fn read_text_export_in(path: &Path, staging_dir: &Path) -> Result<ParseOutcome> {
    let content = fs::read_to_string(path).map_err(|e| CustomError::ReadWithPath {
        source: e,
        path: path.to_path_buf(),
    })?;
    let block = strip_metadata(&content).ok_or_else(|| CustomError::NoDataFound {
        path: path.to_path_buf(),
    })?;
    println!("File has {} lines", block.n_lines);
    let preview: String = block.header_line().chars().take(100).collect();
    println!("Data starts at line {}: {preview}...", block.data_start);

    let mut staged = NamedTempFile::new_in(staging_dir).map_err(|e| CustomError::Write {
        source: e,
        path: staging_dir.to_path_buf(),
    })?;
    let staged_path = staged.path().to_path_buf();
    staged
        .write_all(block.text.as_bytes())
        .and_then(|_| staged.flush())
        .map_err(|e| CustomError::Write {
            source: e,
            path: staged_path,
        })?;

    parse_clean_block(staged.path())
}

/// Strict tab-delimited read, falling back to a relaxed line split.
pub fn parse_clean_block(path: &Path) -> Result<ParseOutcome> {
    match parse_strict(path) {
        Ok(table) => Ok(ParseOutcome::Success(table)),
        Err(e) => {
            println!("Error reading with strict parser: {e}");
            println!("Trying relaxed line-by-line parse...");
            let text = fs::read_to_string(path).map_err(|e| CustomError::ReadWithPath {
                source: e,
                path: path.to_path_buf(),
            })?;
            Ok(parse_relaxed(&text))
        }
    }
}

fn parse_strict(path: &Path) -> std::result::Result<Table, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_path(path)?;
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Table::new(header, rows))
}

/// Split on tabs, taking the first non-blank line as the header. Rows of a
/// different width are dropped and counted.
pub fn parse_relaxed(text: &str) -> ParseOutcome {
    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut discarded_rows = 0;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = line.split('\t').map(str::to_string).collect();
        match &header {
            None => header = Some(fields),
            Some(h) if fields.len() == h.len() => rows.push(fields),
            Some(_) => discarded_rows += 1,
        }
    }

    match header {
        None => ParseOutcome::Failed {
            reason: "no header row".to_string(),
        },
        Some(_) if rows.is_empty() => ParseOutcome::Failed {
            reason: format!("no rows match the header width ({discarded_rows} discarded)"),
        },
        Some(header) => {
            if discarded_rows > 0 {
                println!("Skipped {discarded_rows} malformed rows");
            }
            ParseOutcome::PartialRecovered {
                table: Table::new(header, rows),
                discarded_rows,
            }
        }
    }
}

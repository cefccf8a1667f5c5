pub mod matrix;
pub mod spreadsheet;
pub mod text;

use std::path::{Path, PathBuf};

use crate::error::{CustomError, Result};
use crate::model::Table;

pub use matrix::read_genotype_matrix;
pub use text::{ParseOutcome, ParsePath};

/// A genotype-calling export, classified by file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawExport {
    Spreadsheet(PathBuf),
    DelimitedText(PathBuf),
}

impl RawExport {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        if spreadsheet::is_spreadsheet(&path) {
            RawExport::Spreadsheet(path)
        } else {
            RawExport::DelimitedText(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            RawExport::Spreadsheet(path) | RawExport::DelimitedText(path) => path,
        }
    }

    /// Load the export into a clean table.
    ///
    /// Spreadsheets are read as-is and always count as a strict parse; text
    /// exports go through metadata stripping and the strict/relaxed parse.
    pub fn load(&self) -> Result<(Table, ParsePath)> {
        match self {
            RawExport::Spreadsheet(path) => {
                let table = spreadsheet::read_spreadsheet(path)?;
                Ok((table, ParsePath::Strict))
            }
            RawExport::DelimitedText(path) => {
                let outcome = text::read_text_export(path)?;
                let kind = outcome.kind();
                let discarded_rows = outcome.discarded_rows();
                let (table, parse_path) =
                    outcome
                        .into_table()
                        .map_err(|reason| CustomError::NoValidData {
                            path: path.clone(),
                            reason,
                        })?;
                println!(
                    "Read cleaned file ({kind}, {discarded_rows} rows discarded) with shape: ({}, {})",
                    table.n_rows(),
                    table.n_columns()
                );
                Ok((table, parse_path))
            }
        }
    }
}

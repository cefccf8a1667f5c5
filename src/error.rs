use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path}")]
    ReadWithPath {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not parse {path} as tab-delimited text")]
    CsvRead {
        #[source]
        source: csv::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write tab-delimited output")]
    CsvWrite(#[from] csv::Error),

    #[error("could not read spreadsheet {path}")]
    Spreadsheet {
        #[source]
        source: calamine::Error,
        path: std::path::PathBuf,
    },

    #[error("spreadsheet {path} contains no worksheets")]
    EmptyWorkbook { path: std::path::PathBuf },

    #[error("no data found after metadata lines in {path}")]
    NoDataFound { path: std::path::PathBuf },

    #[error("no valid data found in {path}: {reason}")]
    NoValidData {
        path: std::path::PathBuf,
        reason: String,
    },

    #[error(
        "could not find genotype column matching pattern '*.CEL_call_code'; available columns: {}",
        .available.join(", ")
    )]
    ColumnNotFound { available: Vec<String> },

    #[error("genotype matrix {path} has no header columns")]
    EmptyMatrix { path: std::path::PathBuf },

    #[error("invalid progress bar template")]
    ProgressStyle(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, CustomError>;

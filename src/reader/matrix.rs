use std::path::Path;

use crate::error::{CustomError, Result};
use crate::model::{GenotypeMatrix, Table};

/// Read a joined marker-by-sample matrix. The first column holds marker ids;
/// every other header names a sample. No recovery is attempted on bad rows.
pub fn read_genotype_matrix(path: &Path) -> Result<GenotypeMatrix> {
    let csv_err = |source| CustomError::CsvRead {
        source,
        path: path.to_path_buf(),
    };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)
        .map_err(csv_err)?;

    let header: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();
    if header.is_empty() {
        return Err(CustomError::EmptyMatrix {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(GenotypeMatrix::from_table(Table::new(header, rows)))
}

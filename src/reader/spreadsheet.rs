use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{CustomError, Result};
use crate::model::Table;

pub(crate) const EXTENSIONS: &[&str] = &["xlsx", "xls"];

pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Load the first worksheet with every cell as text. The first row is the header.
pub fn read_spreadsheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|source| CustomError::Spreadsheet {
        source,
        path: path.to_path_buf(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CustomError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|source| CustomError::Spreadsheet {
            source,
            path: path.to_path_buf(),
        })?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let header = rows.next().unwrap_or_default();
    Ok(Table::new(header, rows.collect()))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // Whole numbers come back as floats; print them without the ".0"
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", *f as i64)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn detects_spreadsheet_extensions() {
        assert!(is_spreadsheet(Path::new("run/sample.xlsx")));
        assert!(is_spreadsheet(Path::new("sample.XLS")));
        assert!(!is_spreadsheet(Path::new("sample.txt")));
        assert!(!is_spreadsheet(Path::new("sample")));
    }

    #[test]
    fn reads_cells_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calls.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "probeset_id").unwrap();
        sheet.write_string(0, 1, "NA12878.CEL_call_code").unwrap();
        sheet.write_string(1, 0, "AX-1").unwrap();
        sheet.write_string(1, 1, "AB").unwrap();
        sheet.write_string(2, 0, "AX-2").unwrap();
        sheet.write_number(2, 1, 2.0).unwrap();
        sheet.write_string(3, 0, "AX-3").unwrap();
        workbook.save(&path).unwrap();

        let table = read_spreadsheet(&path).unwrap();
        assert_eq!(table.header, ["probeset_id", "NA12878.CEL_call_code"]);
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.rows[0], ["AX-1", "AB"]);
        assert_eq!(table.rows[1], ["AX-2", "2"]);
        assert_eq!(table.rows[2], ["AX-3", ""]);
    }

    #[test]
    fn unreadable_workbook_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, "not a workbook").unwrap();
        let err = read_spreadsheet(&path).unwrap_err();
        assert!(matches!(err, CustomError::Spreadsheet { .. }), "{err:?}");
    }
}

use std::fs;
use std::io;
use std::path::PathBuf;

use rust_xlsxwriter::{Workbook, XlsxError};
use tempfile::TempDir;

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::Builder::new()
                .prefix("axiom-concordance-tests")
                .tempdir()?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Spreadsheet export whose first sheet holds `rows` as text cells.
    pub fn write_xlsx(&self, name: &str, rows: &[&[&str]]) -> Result<PathBuf, XlsxError> {
        let path = self.path(name);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    sheet.write_string(r as u32, c as u16, *cell)?;
                }
            }
        }
        workbook.save(&path)?;
        Ok(path)
    }
}

/// A text export with `##` metadata ahead of a probeset table.
pub fn axiom_export(sample_column: &str, calls: &[(&str, &str)]) -> String {
    let mut text = String::from("##fileformat=Axiom\n##calls-file=AxiomGT1.calls.txt\n");
    text.push_str(&format!("probeset_id\t{sample_column}\n"));
    for (probe, call) in calls {
        text.push_str(&format!("{probe}\t{call}\n"));
    }
    text
}

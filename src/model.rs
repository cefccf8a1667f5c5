use ndarray::Array2;
use std::collections::HashMap;

/// Tokens read as "no call", in addition to empty cells.
const MISSING_TOKENS: &[&str] = &[
    "--", "NA", "N/A", "NaN", "nan", "-nan", "-NaN", "null", "NULL", "None", "#N/A", "#N/A N/A",
    "#NA", "n/a", "<NA>", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

pub fn is_missing_call(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || MISSING_TOKENS.contains(&value)
}

/// A header plus rectangular rows of text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.header.len()
    }

    /// Cells of one column, top to bottom. Short rows yield empty cells.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(idx).map(String::as_str).unwrap_or(""))
    }
}

/// One sample's non-missing calls, in marker order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCalls {
    pub sample_id: String,
    pub calls: Vec<String>,
}

/// Marker-by-sample call matrix. Calls are interned; code 0 is a missing call.
/// Marker ids are only used as the row index and are not kept.
#[derive(Debug)]
pub struct GenotypeMatrix {
    samples: Vec<String>,
    codes: Array2<u32>,
}

pub const MISSING_CODE: u32 = 0;

impl GenotypeMatrix {
    pub fn from_table(table: Table) -> Self {
        let Table { header, rows } = table;
        let samples: Vec<String> = header.into_iter().skip(1).collect();

        let mut lookup: HashMap<String, u32> = HashMap::new();
        let mut codes = Array2::from_elem((rows.len(), samples.len()), MISSING_CODE);

        for (marker_idx, row) in rows.into_iter().enumerate() {
            // First cell is the marker id; short rows leave trailing calls missing.
            for (sample_idx, call) in row.into_iter().skip(1).take(samples.len()).enumerate() {
                if is_missing_call(&call) {
                    continue;
                }
                let next_code = lookup.len() as u32 + 1;
                codes[[marker_idx, sample_idx]] = *lookup.entry(call).or_insert(next_code);
            }
        }

        Self { samples, codes }
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn n_markers(&self) -> usize {
        self.codes.nrows()
    }

    /// Interned calls for one sample column.
    pub fn codes(&self, sample_idx: usize) -> ndarray::ArrayView1<'_, u32> {
        self.codes.column(sample_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        let mut rows = rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        let header = rows.next().unwrap();
        Table::new(header, rows.collect())
    }

    #[test]
    fn missing_calls() {
        for value in ["", "  ", "--", "NA", "NaN", "#N/A", " -- "] {
            assert!(is_missing_call(value), "{value:?} should be missing");
        }
        for value in ["AA", "AB", "BB", "0", "NoCall", "-"] {
            assert!(!is_missing_call(value), "{value:?} should be a call");
        }
    }

    #[test]
    fn matrix_interns_calls_and_marks_missing() {
        let matrix = GenotypeMatrix::from_table(table(&[
            &["M", "S1", "S2"],
            &["rs1", "A", "A"],
            &["rs2", "B", "C"],
            &["rs3", "--", "B"],
        ]));
        assert_eq!(matrix.samples(), ["S1", "S2"]);
        assert_eq!(matrix.n_markers(), 3);
        assert_eq!(matrix.codes(0)[0], matrix.codes(1)[0]);
        assert_ne!(matrix.codes(0)[1], matrix.codes(1)[1]);
        assert_eq!(matrix.codes(0)[2], MISSING_CODE);
        assert_eq!(matrix.codes(1)[2], matrix.codes(0)[1]);
        assert_ne!(matrix.codes(1)[1], MISSING_CODE);
    }

    #[test]
    fn matrix_with_only_marker_column_has_no_samples() {
        let matrix = GenotypeMatrix::from_table(table(&[&["M"], &["rs1"]]));
        assert_eq!(matrix.n_samples(), 0);
        assert_eq!(matrix.n_markers(), 1);
    }

    #[test]
    fn short_rows_leave_calls_missing() {
        let matrix = GenotypeMatrix::from_table(table(&[&["M", "S1", "S2"], &["rs1", "A"]]));
        assert_ne!(matrix.codes(0)[0], MISSING_CODE);
        assert_eq!(matrix.codes(1)[0], MISSING_CODE);
    }
}

// File: crates/csv-chart/src/table.rs
// Summary: Column-oriented numeric table loaded from a headered CSV file.
// Notes:
// - Column order and names follow the header row.
// - Empty cells are missing values and load as NaN.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from already-parsed columns. All columns must share one length.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        debug_assert!(columns.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { columns }
    }

    /// Open and parse the CSV file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        let table = Self::from_csv(rdr)?;
        log::debug!(
            "loaded {}: {} columns x {} rows",
            path.display(),
            table.ncols(),
            table.nrows()
        );
        Ok(table)
    }

    /// Parse CSV text from any reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        Self::from_csv(rdr)
    }

    fn from_csv<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let names = dedup_names(rdr.headers()?.iter().map(str::trim));
        log::debug!("headers: {:?}", names);

        let mut columns: Vec<Column> = names.into_iter().map(|n| Column::new(n, Vec::new())).collect();

        // The reader is strict about field counts, so every record lines up with the header.
        for (i, rec) in rdr.records().enumerate() {
            let rec = rec?;
            for (col, field) in columns.iter_mut().zip(rec.iter()) {
                let value = parse_cell(field).ok_or_else(|| Error::NonNumeric {
                    column: col.name.clone(),
                    row: i + 1,
                    value: field.to_string(),
                })?;
                col.values.push(value);
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn ncols(&self) -> usize { self.columns.len() }

    pub fn nrows(&self) -> usize { self.columns.first().map_or(0, Column::len) }

    /// Split into the last column and every column before it.
    pub fn split_last(&self) -> Option<(&Column, &[Column])> {
        self.columns.split_last()
    }
}

/// Empty cells are missing (NaN); anything else must parse as a float.
fn parse_cell(field: &str) -> Option<f64> {
    let s = field.trim();
    if s.is_empty() {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}

/// Name blank headers `Unnamed: <idx>` and rename repeats `A, A, A` to `A, A.1, A.2`.
/// A suffixed name that collides again is suffixed once more: `A, A.1, A` gives `A, A.1, A.1.1`.
fn dedup_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<String> = Vec::new();
    for (idx, name) in names.enumerate() {
        let mut col = if name.is_empty() { format!("Unnamed: {idx}") } else { name.to_string() };
        let mut cur = counts.get(&col).copied().unwrap_or(0);
        while cur > 0 {
            counts.insert(col.clone(), cur + 1);
            col = format!("{col}.{cur}");
            cur = counts.get(&col).copied().unwrap_or(0);
        }
        counts.insert(col.clone(), cur + 1);
        out.push(col);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_unique_names() {
        let got = dedup_names(["A", "B", "t"].into_iter());
        assert_eq!(got, vec!["A", "B", "t"]);
    }

    #[test]
    fn dedup_numbers_repeats() {
        let got = dedup_names(["A", "A", "B", "A"].into_iter());
        assert_eq!(got, vec!["A", "A.1", "B", "A.2"]);
    }

    #[test]
    fn dedup_suffixes_the_evolving_name() {
        let got = dedup_names(["A", "A.1", "A"].into_iter());
        assert_eq!(got, vec!["A", "A.1", "A.1.1"]);
    }

    #[test]
    fn dedup_names_blank_headers_by_position() {
        let got = dedup_names(["", "B", ""].into_iter());
        assert_eq!(got, vec!["Unnamed: 0", "B", "Unnamed: 2"]);
    }

    #[test]
    fn parse_cell_handles_blank_and_padding() {
        assert!(parse_cell("").unwrap().is_nan());
        assert!(parse_cell("   ").unwrap().is_nan());
        assert_eq!(parse_cell(" 2.5 "), Some(2.5));
        assert_eq!(parse_cell("abc"), None);
    }
}

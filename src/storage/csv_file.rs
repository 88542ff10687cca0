//! CSV line store
//!
//! Row-level primitive over the data file: every row comes back as an
//! ordered mapping from header name to text, and writes always emit the
//! header first.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;

use crate::error::Result;

/// One data row as ordered `(field name, text)` pairs
///
/// A row shorter than the header simply lacks the trailing fields; cells
/// beyond the header width are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Build a row from `(field, value)` pairs, keeping their order
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Text of the named field, if the row has it
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Whether every name in `fields` is present in this row
    pub fn has_all(&self, fields: &[&str]) -> bool {
        fields.iter().all(|field| self.get(field).is_some())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Read every data row of a CSV file (the first row is the header)
///
/// Rows with a different number of cells than the header are accepted;
/// deciding what to do with them is left to the caller.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(Row::from_pairs(headers.iter().zip(record.iter())));
    }

    Ok(rows)
}

/// Overwrite `path` with `header` followed by one row per record
///
/// The header is written explicitly so an empty record set still produces
/// a valid file. Records are serialized through serde in field order.
pub fn write_records<T: Serialize>(path: &Path, header: &[&str], records: &[T]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(header)?;
    for record in records {
        writer.serialize(record)?;
    }

    let mut file = writer.into_inner().map_err(|e| e.into_error())?;
    file.flush()?;
    file.sync_all()?;

    Ok(())
}

//! CSV export for fetched tables and topic lists.
//!
//! Anything that can present itself as a header row plus string cells
//! implements [`Tabular`] and can be written out with [`to_csv_string`] or
//! [`write_csv_file`]. [`read_csv_shape`] parses an export back far enough to
//! check its headers and row count.

use std::path::Path;

use crate::error::ExportError;

/// A rectangular view of fetched data, ready for CSV serialization.
pub trait Tabular {
    /// Column names, written as the first CSV record.
    fn headers(&self) -> Vec<String>;

    /// Data rows; each row has one cell per header.
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Header and row count of a parsed CSV document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvShape {
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Serializes `table` to a CSV string with a header row.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be written.
pub fn to_csv_string<T: Tabular + ?Sized>(table: &T) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(&mut writer, table)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes `table` as CSV to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if the file cannot be created or a record
/// cannot be written, [`ExportError::Io`] if the final flush fails.
pub fn write_csv_file<T: Tabular + ?Sized>(table: &T, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Parses CSV text and reports its header row and number of data rows.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] on malformed CSV (including ragged rows).
pub fn read_csv_shape(text: &str) -> Result<CsvShape, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let mut row_count = 0;
    for record in reader.records() {
        record?;
        row_count += 1;
    }
    Ok(CsvShape { headers, row_count })
}

fn write_records<W, T>(writer: &mut csv::Writer<W>, table: &T) -> Result<(), ExportError>
where
    W: std::io::Write,
    T: Tabular + ?Sized,
{
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(&row)?;
    }
    Ok(())
}

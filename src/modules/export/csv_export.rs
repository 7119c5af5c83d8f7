//! CSV Export
//!
//! Writes a table's rows as CSV using the table's own column headers and
//! the plain-text form of each cell. The actions column is skipped.

use std::path::Path;

use crate::table::ColumnDescriptor;

use super::ExportError;

pub fn write_rows<T>(
    path: &Path,
    columns: &[ColumnDescriptor<T>],
    rows: &[T],
) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    let columns: Vec<&ColumnDescriptor<T>> =
        columns.iter().filter(|column| !column.is_actions()).collect();

    // Header
    wtr.write_record(
        columns
            .iter()
            .map(|column| column.header.text().unwrap_or(column.id)),
    )?;

    // Data rows
    for row in rows {
        wtr.write_record(columns.iter().map(|column| column.cell(row).plain_text()))?;
    }

    wtr.flush()?;
    Ok(rows.len())
}

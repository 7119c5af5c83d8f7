//! JSON Export
//!
//! Writes full records (every field, wire names) as a pretty JSON array.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::ExportError;

pub fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<usize, ExportError> {
    let json = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(rows.len())
}

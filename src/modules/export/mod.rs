//! Export Module
//!
//! Writes the active entity table to disk.
//!
//! - `:export csv` → visible columns, one line per row
//! - `:export json` → full records
//! - Files land in the configured export dir, or `<data dir>/exports/`
//!
//! The whole filtered collection is exported, not just the current page.

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::core::{Action, NotifyLevel};
use crate::table::EntityTable;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Resolve the export directory, creating it if needed.
pub fn export_dir(configured: Option<&Path>) -> std::io::Result<PathBuf> {
    let dir = configured
        .map(Path::to_path_buf)
        .or_else(|| config::data_dir().map(|dir| dir.join("exports")))
        .unwrap_or_else(|| PathBuf::from(".xoro").join("exports"));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Timestamped path in `dir` that no existing file uses.
fn unique_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S%.3f");
    let mut path = dir.join(format!("{prefix}-{timestamp}.{extension}"));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{prefix}-{timestamp}-{n}.{extension}"));
        n += 1;
    }
    path
}

/// Write `table`'s visible rows into `dir`. Returns the path and row count.
pub fn write_table<T: Clone + Serialize>(
    table: &EntityTable<T>,
    format: ExportFormat,
    dir: &Path,
) -> Result<(PathBuf, usize), ExportError> {
    let path = unique_path(dir, table.name(), format.extension());
    let rows = table.visible_rows();
    let count = match format {
        ExportFormat::Csv => csv_export::write_rows(&path, table.columns(), rows)?,
        ExportFormat::Json => json_export::write_rows(&path, rows)?,
    };
    Ok((path, count))
}

/// Export and report the outcome as a status notification.
pub fn export_table<T: Clone + Serialize>(
    table: &EntityTable<T>,
    format: ExportFormat,
    configured_dir: Option<&Path>,
) -> Action {
    if table.visible_rows().is_empty() {
        return Action::Notify(
            format!("No {} to export", table.name()),
            NotifyLevel::Warn,
        );
    }

    let dir = match export_dir(configured_dir) {
        Ok(dir) => dir,
        Err(e) => {
            warn!("export dir unavailable: {e}");
            return Action::Notify(
                format!("Failed to create export directory: {}", e),
                NotifyLevel::Error,
            );
        }
    };

    match write_table(table, format, &dir) {
        Ok((path, count)) => {
            info!("exported {count} {} to {}", table.name(), path.display());
            Action::Notify(
                format!("Exported {} {} to {}", count, table.name(), path.display()),
                NotifyLevel::Info,
            )
        }
        Err(e) => {
            warn!("export of {} failed: {e}", table.name());
            Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error)
        }
    }
}

//! File logger. The terminal belongs to the UI, so records go to a file.

use std::fs::{self, File};
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("install logger: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Parse a level name; unknown names fall back to `Info`.
pub fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Route `log` records to `path`, truncating it.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), LogInitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| LogInitError::Open {
            path: parent.display().to_string(),
            source,
        })?;
    }
    let log_file = File::create(path).map_err(|source| LogInitError::Open {
        path: path.display().to_string(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }

    #[test]
    fn test_unusable_log_dir_reports_the_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("xoro.log");

        match init(&path, LevelFilter::Info) {
            Err(LogInitError::Open { path, .. }) => {
                assert_eq!(path, blocker.display().to_string());
            }
            other => panic!("expected open error, got {other:?}"),
        }
    }
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::table::{DEFAULT_LOADERS, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("parse config {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial rows per page for the entity tables.
    pub page_size: usize,

    /// Sizes offered by the page size selector.
    pub page_size_options: Vec<usize>,

    /// Skeleton rows drawn while a table is loading.
    pub loaders: usize,

    /// JSON fixture file; the built-in dataset is used when unset.
    pub fixtures: Option<PathBuf>,

    pub export_dir: Option<PathBuf>,

    pub log_file: Option<PathBuf>,

    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            loaders: DEFAULT_LOADERS,
            fixtures: None,
            export_dir: None,
            log_file: None,
            log_level: None,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.page_size = config.page_size.max(1);
        config.page_size_options.retain(|size| *size > 0);
        if config.page_size_options.is_empty() {
            config.page_size_options = PAGE_SIZE_OPTIONS.to_vec();
        }
        Ok(config)
    }
}

/// Load the config from the default location. A missing file yields the
/// defaults; an unreadable or malformed one is an error.
pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let display = path.display().to_string();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: display,
                source,
            })
        }
    };
    Config::from_toml(&content).map_err(|source| ConfigError::Toml {
        path: display,
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("XORO_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("xoro").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("xoro").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "xoro", "xoro")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("xoro"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("xoro"));
    }
    directories::ProjectDirs::from("io", "xoro", "xoro").map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("xoro.log"))
}

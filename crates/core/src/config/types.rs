use std::path::PathBuf;

use serde::Deserialize;

use crate::render::{DEFAULT_DATE_FORMAT, ListType, SortKey};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ContentConfig {
    /// Default content directory for `list` (supports `~` and `$VAR`).
    #[serde(default)]
    pub root: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_list_type", rename = "type")]
    pub list_type: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            list_type: default_list_type(),
            date_format: default_date_format(),
        }
    }
}

fn default_sort() -> String {
    SortKey::default().to_string()
}

fn default_list_type() -> String {
    ListType::default().to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// File the settings came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub content_root: Option<PathBuf>,
    pub sort: SortKey,
    pub list_type: ListType,
    pub date_format: String,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: None,
            content_root: None,
            sort: SortKey::default(),
            list_type: ListType::default(),
            date_format: default_date_format(),
            logging: LoggingConfig::default(),
        }
    }
}

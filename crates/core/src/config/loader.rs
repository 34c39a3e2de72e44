use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use crate::frontmatter::timestamp::is_valid_layout;
use crate::render::{ListType, RenderError, SortKey};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("invalid value in {0}: {1}")]
    InvalidValue(String, #[source] RenderError),

    #[error("invalid date_format '{0}'")]
    BadDateFormat(String),

    #[error("cannot expand '{0}': {1}")]
    Expand(String, String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from `config_path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file means defaults.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let path = default_config_path();
                if !path.exists() {
                    return Ok(ResolvedConfig::default());
                }
                path
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        Self::resolve(&path, cf)
    }

    fn resolve(path: &Path, cf: ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let invalid = |e| ConfigError::InvalidValue(path.display().to_string(), e);

        let sort: SortKey = cf.list.sort.parse().map_err(invalid)?;
        let list_type: ListType = cf.list.list_type.parse().map_err(invalid)?;

        if !is_valid_layout(&cf.list.date_format) {
            return Err(ConfigError::BadDateFormat(cf.list.date_format));
        }

        let content_root = cf.content.root.as_deref().map(expand_path).transpose()?;

        let logging = match cf.logging.file {
            Some(ref file) => LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            },
            None => cf.logging,
        };

        Ok(ResolvedConfig {
            source: Some(path.to_path_buf()),
            content_root,
            sort,
            list_type,
            date_format: cf.list.date_format,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("hugo-utils").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("hugo-utils").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded =
        full(input).map_err(|e| ConfigError::Expand(input.to_string(), e.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}

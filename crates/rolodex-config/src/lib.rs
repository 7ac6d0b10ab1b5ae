pub mod banner;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use banner::load_banner;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";
const BANNER_FILENAME: &str = "banner.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub contacts_path: Option<PathBuf>,
    pub banner_path: Option<PathBuf>,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contacts_path: None,
            banner_path: None,
            color: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid {field} value in config: path cannot be empty")]
    InvalidPath { field: &'static str },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    contacts_path: Option<PathBuf>,
    banner_path: Option<PathBuf>,
    color: Option<bool>,
}

/// Loads the config file. An explicit `config_path` must exist; the default
/// location is optional and falls back to built-in defaults.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        path
    } else {
        let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
        home.join(".config")
    };
    Ok(base.join(APP_DIR))
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => Ok(config_dir()?.join(CONFIG_FILENAME)),
    }
}

/// Banner location: the command-line value, then the config value, then
/// `banner.txt` next to the default config file.
pub fn resolve_banner_path(custom: Option<PathBuf>, config: &AppConfig) -> Option<PathBuf> {
    custom
        .or_else(|| config.banner_path.clone())
        .or_else(|| config_dir().ok().map(|dir| dir.join(BANNER_FILENAME)))
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(Some(merge_config(parsed, base)?))
}

fn merge_config(parsed: ConfigFile, base: &Path) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(path) = parsed.contacts_path {
        config.contacts_path = Some(resolve_relative(path, base, "contacts_path")?);
    }

    if let Some(path) = parsed.banner_path {
        config.banner_path = Some(resolve_relative(path, base, "banner_path")?);
    }

    if let Some(color) = parsed.color {
        config.color = color;
    }

    Ok(config)
}

// Relative paths in the config file are taken relative to the file itself.
fn resolve_relative(path: PathBuf, base: &Path, field: &'static str) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidPath { field });
    }
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(base.join(path))
    }
}

use chrono::Utc;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Key the size limit is stored under
pub const LIMIT_KEY: &str = "CHATGPT_SPLITTER_CHUNK_LIMIT";

/// Limit used when nothing valid is stored
pub const DEFAULT_LIMIT: usize = crate::chunker::DEFAULT_CHUNK_SIZE;

/// Environment variable that overrides the preferences file location
pub const CONFIG_ENV: &str = "CHAT_SPLITTER_CONFIG";

const UPDATED_AT_KEY: &str = "updated_at";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read preferences at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write preferences at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("No configuration directory available; set CHAT_SPLITTER_CONFIG")]
    NoConfigDir,
}

/// Key/value preferences kept in a JSON file. Last write wins.
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    values: Map<String, Value>,
}

impl Preferences {
    /// Location from `CHAT_SPLITTER_CONFIG`, else the user config directory
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("chat-splitter").join("preferences.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load preferences from `path`.
    ///
    /// A missing file gives empty preferences. So does a file that is not a
    /// JSON object; it is overwritten on the next save.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => parse_values(&path, &raw),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file yet");
                Map::new()
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored limit, or [`DEFAULT_LIMIT`] when absent or not a positive integer
    pub fn limit(&self) -> usize {
        self.values
            .get(LIMIT_KEY)
            .and_then(|v| match v {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse::<u64>().ok(),
                _ => None,
            })
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.values.insert(LIMIT_KEY.to_string(), Value::from(limit));
        self.values
            .insert(UPDATED_AT_KEY.to_string(), Value::from(Utc::now().to_rfc3339()));
    }

    /// When the preferences were last changed, if ever
    pub fn updated_at(&self) -> Option<&str> {
        self.values.get(UPDATED_AT_KEY).and_then(Value::as_str)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

fn parse_values(path: &Path, raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(values)) => values,
        Ok(_) | Err(_) => {
            warn!(path = %path.display(), "ignoring unreadable preferences file");
            Map::new()
        }
    }
}

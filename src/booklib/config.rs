use crate::error::{BooklibError, Result};
use crate::query::SortKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_DEFAULT_SORT: &str = "default-sort";
pub const KEY_REVERSE: &str = "reverse";
pub const KEYS: [&str; 2] = [KEY_DEFAULT_SORT, KEY_REVERSE];

/// Configuration for booklib, stored next to the library as config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BooklibConfig {
    /// Sort key used by `list` when none is given on the command line
    #[serde(default)]
    pub default_sort: Option<String>,

    /// List in descending order by default
    #[serde(default)]
    pub reverse: bool,
}

impl BooklibConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BooklibError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            BooklibError::Config(format!("{} is not valid: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BooklibError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BooklibError::Serialization)?;
        fs::write(config_path, content).map_err(BooklibError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            KEY_DEFAULT_SORT => Ok(self
                .default_sort
                .clone()
                .unwrap_or_else(|| "none".to_string())),
            KEY_REVERSE => Ok(self.reverse.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DEFAULT_SORT => {
                self.default_sort = match value.trim() {
                    "" | "none" => None,
                    v => {
                        let sort_key: SortKey = v
                            .parse()
                            .map_err(|e: BooklibError| BooklibError::Config(e.to_string()))?;
                        Some(sort_key.to_string())
                    }
                };
                Ok(())
            }
            KEY_REVERSE => {
                self.reverse = value.trim().parse().map_err(|_| {
                    BooklibError::Config(format!(
                        "reverse expects true or false, got '{}'",
                        value
                    ))
                })?;
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }
}

fn unknown_key(key: &str) -> BooklibError {
    BooklibError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        KEYS.join(", ")
    ))
}

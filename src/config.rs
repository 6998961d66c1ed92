use std::{fs, path::PathBuf};

use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{CogsError, Result};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory where persistent records are stored
    pub data_dir: PathBuf,

    /// Number of post-its per row when rendering the board
    pub columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            columns: 2,
        }
    }
}

impl Config {
    /// Loads the configuration file, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        let path = config_file_path();
        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    debug!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Configuration file is invalid, using defaults: {}", e);
                    Config::default()
                }
            },
            Err(_) => {
                debug!("No configuration file at {}, using defaults", path.display());
                Config::default()
            }
        }
    }

    /// Writes the configuration as pretty JSON to the config file path
    pub fn save(&self) -> Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| CogsError::DirectoryError {
                path: parent.to_path_buf(),
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        debug!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// Platform default data directory, with a relative fallback when the
/// platform directories cannot be resolved
fn default_data_dir() -> PathBuf {
    match ProjectDirs::from("com", "cogs", "cogs") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".cogs"),
    }
}

fn config_file_path() -> PathBuf {
    match ProjectDirs::from("com", "cogs", "cogs") {
        Some(dirs) => dirs.config_dir().join("config.json"),
        None => PathBuf::from(".cogs").join("config.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_two_columns() {
        assert_eq!(Config::default().columns, 2);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/cogs-data"),
            columns: 3,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

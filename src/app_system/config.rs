use std::path::PathBuf;

use thiserror::Error;

use crate::store::{is_valid_key, DEFAULT_STORAGE_KEY};

/// Default directory holding the storage slots.
const DEFAULT_DATA_DIR: &str = "./data";
/// Default capacity of the form service's request channel.
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime settings for the form system.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                      | Default         |
    /// |------------------------------|-----------------|
    /// | `FEEDBACK_DATA_DIR`          | `./data`        |
    /// | `FEEDBACK_STORAGE_KEY`       | `submittedData` |
    /// | `FEEDBACK_CHANNEL_CAPACITY`  | `32`            |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("FEEDBACK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let storage_key = match lookup("FEEDBACK_STORAGE_KEY") {
            Some(key) if !is_valid_key(&key) => {
                return Err(ConfigError::InvalidValue {
                    var: "FEEDBACK_STORAGE_KEY",
                    value: key,
                })
            }
            Some(key) => key,
            None => defaults.storage_key,
        };

        let channel_capacity = match lookup("FEEDBACK_CHANNEL_CAPACITY") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "FEEDBACK_CHANNEL_CAPACITY",
                        value: raw,
                    })
                }
            },
            None => defaults.channel_capacity,
        };

        Ok(Self {
            data_dir,
            storage_key,
            channel_capacity,
        })
    }
}

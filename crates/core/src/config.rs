//! Per-environment settings from `configs/config.json`

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "./configs/config.json";

/// Largest accepted `CHESS_SQUARE_SIZE`, in pixels
pub const MAX_SQUARE_SIZE: u32 = 1024;

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`]
pub const CONFIG_PATH_VAR: &str = "CHESS_FLASH_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| {
                Error::Config(format!(
                    "unknown environment '{}' (expected development, staging or production)",
                    s
                ))
            })
    }
}

/// Settings of one environment section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(rename = "CHESS_PIECES_ASSETS_DIRECTORY")]
    pub assets_dir: PathBuf,
    #[serde(rename = "CHESS_FEN_DATASET_FILENAME")]
    pub dataset_path: PathBuf,
    #[serde(rename = "CHESS_PUZZLE_FILENAME")]
    pub output_path: PathBuf,
    #[serde(rename = "CHESS_SQUARE_SIZE")]
    pub square_size: u32,
}

impl Settings {
    /// Reads the config file and returns the section for `env`
    pub fn load<P: AsRef<Path>>(path: P, env: Environment) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read '{}': {}", path.display(), e)))?;
        debug!(path = %path.display(), %env, "loading configuration");
        Self::from_json(&content, env)
    }

    pub fn from_json(json: &str, env: Environment) -> Result<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("malformed JSON: {}", e)))?;

        let section = root
            .get(env.as_str())
            .ok_or_else(|| Error::Config(format!("missing section '{}'", env)))?;

        let settings: Settings = serde_json::from_value(section.clone())
            .map_err(|e| Error::Config(format!("section '{}': {}", env, e)))?;

        if settings.square_size == 0 || settings.square_size > MAX_SQUARE_SIZE {
            return Err(Error::Config(format!(
                "section '{}': CHESS_SQUARE_SIZE must be between 1 and {}, got {}",
                env, MAX_SQUARE_SIZE, settings.square_size
            )));
        }

        Ok(settings)
    }
}

/// Config file path, honouring `CHESS_FLASH_CONFIG`
pub fn config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

//! Application configuration, read from an optional TOML file.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "invaders.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(io::Error),
    #[error(transparent)]
    Toml(toml::de::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// RNG seed for invader missile rolls.
    pub seed: u64,
    /// Directory holding `images/`.
    pub assets_dir: PathBuf,
    /// One of error, warn, info, debug, trace, off. `RUST_LOG` takes precedence.
    pub log_level: String,
    pub display: Display,
}

impl Config {
    pub fn from_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let mut file = File::open(path).map_err(ConfigError::Io)?;

        let mut buf = String::new();
        file.read_to_string(&mut buf).map_err(ConfigError::Io)?;

        Self::parse(&buf)
    }

    /// Like [`Config::from_file`], but a missing file yields the defaults.
    pub fn load_or_default<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        match Self::from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            res => res,
        }
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Maximum log level, preferring `RUST_LOG` over the config file.
    pub fn log_filter(&self) -> LevelFilter {
        let level = std::env::var("RUST_LOG").unwrap_or_else(|_| self.log_level.clone());
        parse_level(&level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 42,
            assets_dir: PathBuf::from("assets"),
            log_level: String::from("info"),
            display: Display::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Display {
    /// Outline every collision box.
    ///
    /// Defaults to `false`.
    pub show_hitboxes: bool,
}

/// Parse a level name; unknown names fall back to `INFO`.
pub fn parse_level(s: &str) -> LevelFilter {
    match s {
        "error" | "ERROR" => LevelFilter::ERROR,
        "warn" | "WARN" => LevelFilter::WARN,
        "info" | "INFO" => LevelFilter::INFO,
        "debug" | "DEBUG" => LevelFilter::DEBUG,
        "trace" | "TRACE" => LevelFilter::TRACE,
        "off" | "OFF" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

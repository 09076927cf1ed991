//! User configuration loaded from `config.toml`.
//!
//! Every field is optional; missing fields take the defaults of the
//! original keypad and console layouts.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const APP_DIR: &str = "keycalc";
const CONFIG_FILE: &str = "config.toml";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid colour '{0}', expected #rrggbb")]
    InvalidColor(String),
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub console: ConsoleConfig,
    pub keypad: KeypadConfig,
}

/// Settings for the menu-driven front end.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Digits after the decimal point in `Result:` lines.
    pub decimals: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

/// Settings for the keypad front end.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeypadConfig {
    /// Edge length of one key cell.
    pub button_size: u32,
    /// Space between neighbouring cells.
    pub gap: u32,
    /// Space around the whole grid.
    pub padding: u32,
    pub theme: ThemeConfig,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            button_size: 96,
            gap: 16,
            padding: 18,
            theme: ThemeConfig::default(),
        }
    }
}

/// Keypad colours.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: Rgb,
    pub digit: Rgb,
    pub operator: Rgb,
    pub clear: Rgb,
    pub equals: Rgb,
    pub text: Rgb,
    pub equals_text: Rgb,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: Rgb(0x0f, 0x0f, 0x12),
            digit: Rgb(0x2f, 0x2f, 0x34),
            operator: Rgb(0x55, 0x60, 0x7a),
            clear: Rgb(0x3b, 0x5a, 0xa4),
            equals: Rgb(0xe9, 0xbf, 0xe0),
            text: Rgb(0xff, 0xff, 0xff),
            equals_text: Rgb(0x00, 0x00, 0x00),
        }
    }
}

/// A 24-bit colour, written `#rrggbb` in the config file.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Default location: `<config dir>/keycalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

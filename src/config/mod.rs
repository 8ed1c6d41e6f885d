//! Configuration management for Interlineal.
//!
//! Configuration is read from `~/.config/interlineal/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::fetcher::SourceLayout;
use crate::loader::DEFAULT_STRUCTURED_BOOKS;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub http: HttpConfig,
}

/// Where the sources live and how they are named.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// HTTP(S) base URL or local directory holding the data files.
    pub location: String,

    #[serde(flatten)]
    pub layout: SourceLayout,

    /// Books read from structured JSON instead of Hebrew markup.
    pub structured_books: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: "http://localhost:3000/data/bible/".to_string(),
            layout: SourceLayout::default(),
            structured_books: DEFAULT_STRUCTURED_BOOKS
                .iter()
                .map(|b| b.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "interlineal/0.1.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/interlineal/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("interlineal").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# Interlineal configuration

[source]
# Base URL (http:// or https://) or local directory holding the data files
location = "http://localhost:3000/data/bible/"

# Shared Spanish markup (USFX) holding every book
spanish_markup = "spavbl_usfx.xml"

# Per-book paths. {book} is the book id, {book_lower} the lowercased id
hebrew_markup = "hebrew/{book}.xml"
structured_json = "{book_lower}.json"

# Books that ship a structured per-word JSON file
structured_books = ["Genesis", "Exodus", "Leviticus"]

[http]
# Request timeout in seconds
timeout_secs = 10
user_agent = "interlineal/0.1.0"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

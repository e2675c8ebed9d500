use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::source::Source;
use crate::store::ViewMode;
use crate::{DirectoryError, Result};

/// Published spreadsheet endpoint serving the profile array
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxoCqFq2-BSgaLH0OomtX7jGc5CwjH4-UQtfgnEM2fy7_oYfCQWFjaEwzXjNJu6ZrUN_w/exec";

pub const CONFIG_FOLDER: &str = ".bloom";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint URL or local JSON file holding the profile array
    pub source: String,
    /// Where exported profiles are written
    pub export_dir: PathBuf,
    pub view: ViewMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_ENDPOINT.to_owned(),
            export_dir: PathBuf::from("."),
            view: ViewMode::default(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicitly given file must exist. Otherwise
    /// `~/.bloom/config.json` is used when present, and the defaults
    /// when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::info!("config provided explicitly: {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::info!("config found at {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                log::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            DirectoryError::Config(format!(
                "cannot open {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            DirectoryError::Config(format!(
                "cannot parse {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(CONFIG_FOLDER).join(CONFIG_FILE))
    }

    pub fn source(&self) -> Source {
        Source::parse(&self.source)
    }
}

//! Configuration file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use super::OxbindConfiguration;
use crate::{OxbindError, Result};

/// Config file names in priority order
const CONFIG_FILE_NAMES: [&str; 3] = [".oxbindrc.json", ".oxbindrc.toml", "oxbind.json"];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Searches each directory for `.oxbindrc.json`, `.oxbindrc.toml` and
    /// `oxbind.json` in that order, moving up until a config is found or the
    /// filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| OxbindError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    ///
    /// `.toml` files are read as TOML, everything else as JSON.
    pub fn load_from_file(path: &Path) -> Result<OxbindConfiguration> {
        let content = fs::read_to_string(path).map_err(|e| OxbindError::io_error(path, e))?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| {
            OxbindError::config_error(format!(
                "Failed to load config from '{}': {e}",
                path.display()
            ))
        })
    }

    /// Load config from path or auto-discover
    ///
    /// An explicit path must exist. Without one, discovery starts from
    /// `start_dir` (or the current directory) and an empty configuration is
    /// returned when nothing is found.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<OxbindConfiguration> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(OxbindError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(config_path) => Self::load_from_file(&config_path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(OxbindConfiguration::default())
            }
        }
    }
}

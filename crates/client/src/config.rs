//! Service endpoint configuration.
//!
//! Reads/writes <config-dir>/gridlift/service.json. Absent or invalid config
//! falls back to the default local origin.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default transformation service origin (local development backend).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Where the transformation service lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service origin (e.g. "http://127.0.0.1:8000"). Endpoint paths are
    /// fixed per operation and appended to this.
    pub base_url: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Returns the path to the service config file.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|c| c.join("gridlift/service.json"))
}

/// Load the saved service config from disk.
/// Returns None if nothing is saved or the file is invalid.
pub fn load_config() -> Option<ServiceConfig> {
    load_config_from(&config_file_path()?)
}

fn load_config_from(path: &Path) -> Option<ServiceConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save the service config to disk.
/// Creates the parent directory if it doesn't exist.
pub fn save_config(config: &ServiceConfig) -> Result<(), String> {
    let path = config_file_path().ok_or("Could not determine config directory")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let contents = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&path, &contents).map_err(|e| format!("Failed to write config file: {}", e))
}

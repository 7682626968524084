//! XDG config directory resolution.
//!
//! folio keeps no data, state or cache on disk; the only location it
//! resolves is where its optional config file lives.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "folio";

/// Resolved folio config location
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve the config directory
    ///
    /// Priority order (highest to lowest):
    /// 1. FOLIO_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME/folio
    /// 3. ~/.config/folio
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("FOLIO_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_DIR)
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // FOLIO_CONFIG_FILE is an explicit override
        if let Ok(file) = env::var("FOLIO_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

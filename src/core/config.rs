//! Configuration management for folio.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{FolioError, Result};
use crate::core::search::{QueryMode, SearchOptions, DEFAULT_CONTEXT_CHARS, DEFAULT_MAX_SNIPPETS};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Characters of context on each side of a snippet match
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,

    /// Snippets kept per matching file
    #[serde(default = "default_max_snippets")]
    pub max_snippets: usize,

    /// Literal text or regular expression
    #[serde(default)]
    pub query_mode: QueryMode,
}

/// Content source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Site manifest (TOML or JSON); takes precedence over `root_dir`
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    /// Directory of pages to walk when no manifest is set
    #[serde(default)]
    pub root_dir: Option<PathBuf>,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in KB (skip larger files)
    #[serde(default = "default_max_file_size_kb")]
    pub max_file_size_kb: usize,
}

fn default_context_chars() -> usize {
    DEFAULT_CONTEXT_CHARS
}

fn default_max_snippets() -> usize {
    DEFAULT_MAX_SNIPPETS
}

fn default_max_file_size_kb() -> usize {
    512
}

fn default_include_patterns() -> Vec<String> {
    [
        "*.md", "*.mdx", "*.txt", "*.json", "*.toml", "*.yaml", "*.yml", "*.html", "*.css",
        "*.js", "*.jsx", "*.ts", "*.tsx", "*.rs", "*.py",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_exclude_patterns() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/target/**",
        "**/dist/**",
        "**/build/**",
        "**/.next/**",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_chars: default_context_chars(),
            max_snippets: default_max_snippets(),
            query_mode: QueryMode::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            root_dir: None,
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_kb: default_max_file_size_kb(),
        }
    }
}

impl SearchConfig {
    /// Options handed to the search index
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            context_chars: self.context_chars,
            max_snippets: self.max_snippets,
            mode: self.query_mode,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FolioError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with an explicit XDG location
    ///
    /// Priority order:
    /// 1. FOLIO_CONFIG env var
    /// 2. XDG config file (~/.config/folio/config.toml, or FOLIO_CONFIG_FILE)
    /// 3. ./folio.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("FOLIO_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("folio.toml").exists() {
                Self::from_file("folio.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Search configuration
        if let Ok(context) = env::var("FOLIO_CONTEXT_CHARS") {
            if let Ok(c) = context.parse() {
                self.search.context_chars = c;
            }
        }
        if let Ok(max_snippets) = env::var("FOLIO_MAX_SNIPPETS") {
            if let Ok(n) = max_snippets.parse() {
                self.search.max_snippets = n;
            }
        }
        if let Ok(mode) = env::var("FOLIO_QUERY_MODE") {
            match mode.parse() {
                Ok(m) => self.search.query_mode = m,
                Err(e) => tracing::warn!("Ignoring FOLIO_QUERY_MODE: {}", e),
            }
        }

        // Content configuration: an env source replaces the file's source,
        // and FOLIO_MANIFEST wins when both are set
        if let Ok(dir) = env::var("FOLIO_CONTENT_DIR") {
            self.content.root_dir = Some(PathBuf::from(dir));
            self.content.manifest = None;
        }
        if let Ok(manifest) = env::var("FOLIO_MANIFEST") {
            self.content.manifest = Some(PathBuf::from(manifest));
            self.content.root_dir = None;
        }
        if let Ok(max_size) = env::var("FOLIO_MAX_FILE_SIZE_KB") {
            if let Ok(size) = max_size.parse() {
                self.content.max_file_size_kb = size;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_snippets == 0 {
            return Err(FolioError::ConfigError(
                "Max snippets must be non-zero".to_string(),
            ));
        }

        if self.content.max_file_size_kb == 0 {
            return Err(FolioError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Context chars: {}", self.search.context_chars);
        tracing::debug!("  Max snippets: {}", self.search.max_snippets);
        tracing::debug!("  Query mode: {:?}", self.search.query_mode);
        tracing::debug!("  Manifest: {:?}", self.content.manifest);
        tracing::debug!("  Content dir: {:?}", self.content.root_dir);
        tracing::debug!(
            "  Include patterns: {} patterns",
            self.content.include_patterns.len()
        );
        tracing::debug!(
            "  Exclude patterns: {} patterns",
            self.content.exclude_patterns.len()
        );
        tracing::debug!("  Max file size: {} KB", self.content.max_file_size_kb);
    }
}

//! Run configuration
//!
//! Settings are read from `fixup.toml` in the root being fixed, or from an
//! explicit `--config` path, and every field falls back to a default. The
//! rewrite tables are compiled in and cannot be changed here.
//!
//! ```toml
//! source_extensions = ["go"]
//! config_extensions = ["conf"]
//! skip_suffixes = [".exe"]
//! skip_hidden = true
//! backup = false
//! ```

use crate::error::{FixError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;


/// Name of the configuration file looked up in the root directory
pub const CONFIG_FILE_NAME: &str = "fixup.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixConfig {
    /// Extensions of compilable source files (cache-put rewrite, imports)
    pub source_extensions: Vec<String>,
    /// Extensions of application configuration files (key renames)
    pub config_extensions: Vec<String>,
    /// File name suffixes that are never touched
    pub skip_suffixes: Vec<String>,
    /// Skip dotfiles and do not descend into dot-directories
    pub skip_hidden: bool,
    /// Keep a `.bak` copy of every rewritten file
    pub backup: bool,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            source_extensions: vec!["go".to_string()],
            config_extensions: vec!["conf".to_string()],
            skip_suffixes: vec![".exe".to_string()],
            skip_hidden: true,
            backup: false,
        }
    }
}

impl FixConfig {
    /// Parse and validate configuration text; `origin` is used in errors
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let mut config: FixConfig =
            toml::from_str(content).map_err(|source| FixError::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FixError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Explicit path first, then `fixup.toml` in `root`, then defaults
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading configuration from {}", path.display());
            return Self::load(path);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!("Loading configuration from {}", candidate.display());
            return Self::load(&candidate);
        }

        tracing::debug!("No {CONFIG_FILE_NAME} found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("source_extensions", &self.source_extensions),
            ("config_extensions", &self.config_extensions),
            ("skip_suffixes", &self.skip_suffixes),
        ];
        for (name, values) in lists {
            if values.iter().any(|v| v.is_empty()) {
                return Err(FixError::Config(format!("{name} contains an empty entry")));
            }
        }

        if let Some(ext) = self
            .source_extensions
            .iter()
            .find(|ext| self.config_extensions.contains(ext))
        {
            return Err(FixError::Config(format!(
                "extension '{ext}' is listed as both source and config"
            )));
        }
        Ok(())
    }

    /// Extensions may be written with or without the leading dot
    fn normalize(&mut self) {
        for ext in self
            .source_extensions
            .iter_mut()
            .chain(self.config_extensions.iter_mut())
        {
            if let Some(stripped) = ext.strip_prefix('.') {
                *ext = stripped.to_string();
            }
        }
    }

    pub fn is_source_extension(&self, ext: &str) -> bool {
        self.source_extensions.iter().any(|e| e == ext)
    }

    pub fn is_config_extension(&self, ext: &str) -> bool {
        self.config_extensions.iter().any(|e| e == ext)
    }

    pub fn is_skipped_name(&self, name: &str) -> bool {
        self.skip_suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}

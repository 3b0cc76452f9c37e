//! Global configuration management
//!
//! Provides persistent storage for user preferences. Config is stored at
//! `~/.fundtrack/config.toml`. Preferences only shape the default view;
//! explicit CLI flags always win.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Global fundtrack configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default view preferences
    #[serde(default)]
    pub defaults: ViewDefaults,
}

/// Default registry-view preferences applied when flags are absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewDefaults {
    /// Default status filter for `fundtrack alumni` (e.g., "committed";
    /// absent means the wildcard)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Default sort column for `fundtrack alumni` (e.g., "name")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl GlobalConfig {
    /// Load config from the default location, or defaults if not present
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::global_config())
    }

    /// Load config from an explicit path, or defaults if unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&paths::global_config())
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

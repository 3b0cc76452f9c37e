//! Centralized path definitions for fundtrack
//!
//! Single source of truth for filesystem paths. The only state fundtrack
//! keeps on disk is user preferences:
//!
//! ```text
//! ~/.fundtrack/
//! └── config.toml               # User preferences (default filter/sort)
//! ```
//!
//! Records themselves are never persisted; the registry is seeded in
//! memory per invocation.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".fundtrack";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global fundtrack directory.
///
/// Returns `~/.fundtrack/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.fundtrack/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

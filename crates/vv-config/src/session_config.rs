use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_KEY,
    MAX_STORAGE_KEY_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

/// Where the persisted session record lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the record, relative to the config dir
    pub storage_dir: String,
    /// Record name; the file is `<storage_key>.json`
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: String::from(DEFAULT_STORAGE_DIR),
            storage_key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.storage_dir).is_absolute() || self.storage_dir.contains("..") {
            return Err(ConfigError::session(
                "session.storage_dir must be relative and cannot contain '..'",
            ));
        }

        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::session("session.storage_key cannot be empty"));
        }

        if self.storage_key.len() > MAX_STORAGE_KEY_LENGTH {
            return Err(ConfigError::session(format!(
                "session.storage_key exceeds {MAX_STORAGE_KEY_LENGTH} characters"
            )));
        }

        if self
            .storage_key
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':') || c.is_control())
            || self.storage_key.starts_with('.')
        {
            return Err(ConfigError::session(format!(
                "session.storage_key '{}' must be a plain file name",
                self.storage_key
            )));
        }

        Ok(())
    }
}

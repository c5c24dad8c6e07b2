//! Settings document store: one JSON document under a well-known path,
//! replaced wholesale on every save. No partial updates.

use crate::types::SettingsSnapshot;
use error::SettingsError;
use log::warn;
use std::path::PathBuf;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum SettingsError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("serialize error: {0}")]
        Serialize(#[from] serde_json::Error),
    }
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the persisted snapshot. Absence is the only negative signal:
    /// a missing document means first run, and an unreadable or malformed
    /// one is logged and reported the same way so startup can fall back
    /// to full defaults instead of failing.
    pub fn load(&self) -> Option<SettingsSnapshot> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("failed to read settings document: {err}");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!("malformed settings document, falling back to defaults: {err}");
                None
            }
        }
    }

    /// Replaces the entire document. Written to a temp file first so a
    /// failed write cannot truncate the previous document.
    pub fn save(&self, snapshot: &SettingsSnapshot) -> Result<(), SettingsError> {
        let json = serde_json::to_string(snapshot)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;

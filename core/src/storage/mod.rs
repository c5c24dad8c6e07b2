//! Persistence layer: the settings document and the wallpaper blob store
//! behind one facade.
//!
//! The split follows the data: the settings snapshot is a small JSON
//! document replaced wholesale on every save, while the wallpaper media
//! is a single large payload that only changes when the user applies or
//! removes a wallpaper. Callers go through [`Persistence`] and never
//! branch on which backend a field lives in.

use crate::types::{Config, SettingsSnapshot};
use error::StorageError;

pub(crate) mod settings;
pub(crate) mod wallpaper_db;

pub use settings::SettingsStore;
pub use wallpaper_db::WallpaperDb;

pub mod error {
    use super::settings::error::SettingsError;
    use super::wallpaper_db::error::BlobError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StorageError {
        #[error("Settings error: {0}")]
        Settings(#[from] SettingsError),

        #[error("Blob store error: {0}")]
        Blob(#[from] BlobError),
    }
}

/// Facade over the two storage backends.
pub struct Persistence {
    settings: SettingsStore,
    blobs: WallpaperDb,
}

impl Persistence {
    /// Opens both backends. Idempotent: the blob table is created on
    /// first open and reused afterwards.
    pub fn open(config: &Config) -> Result<Self, StorageError> {
        let settings = SettingsStore::new(config.settings_path());
        let blobs = WallpaperDb::open(config)?;
        Ok(Self { settings, blobs })
    }
}

/// Settings document operations.
impl Persistence {
    /// Loads the persisted snapshot. `None` means first run (or an
    /// unreadable document, which is treated the same way).
    pub fn load_settings(&self) -> Option<SettingsSnapshot> {
        self.settings.load()
    }

    pub fn save_settings(&self, snapshot: &SettingsSnapshot) -> Result<(), StorageError> {
        Ok(self.settings.save(snapshot)?)
    }
}

/// Wallpaper blob operations.
impl Persistence {
    pub fn load_blob(&self) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get()?)
    }

    pub fn save_blob(&mut self, data: &str) -> Result<(), StorageError> {
        Ok(self.blobs.put(data)?)
    }

    pub fn delete_blob(&mut self) -> Result<(), StorageError> {
        Ok(self.blobs.delete()?)
    }
}

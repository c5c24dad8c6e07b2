use std::path::PathBuf;

/// Storage configuration: where the two backends live on disk.
#[derive(Clone)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    /// The wallpaper blob database.
    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("spacetab.redb")
    }

    /// The settings document, one JSON file replaced wholesale on save.
    pub fn settings_path(&self) -> PathBuf {
        self.base_path.join("settings.json")
    }
}

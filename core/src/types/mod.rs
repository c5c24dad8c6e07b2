pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config, ProviderKeys};

pub(crate) mod engine;
pub use engine::{EngineInfo, SearchEngine};

pub(crate) mod percent;
pub use percent::Percent;

pub(crate) mod state;
pub use state::{
    AppState, Bookmark, Note, Theme, Todo, Wallpaper, WallpaperKind, WallpaperTab,
    default_bookmarks,
};

pub(crate) mod snapshot;
pub use snapshot::{SettingsSnapshot, WallpaperSettings};

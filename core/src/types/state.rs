use crate::types::engine::SearchEngine;
use crate::types::percent::Percent;
use crate::types::snapshot::SettingsSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// The single in-memory application state. Constructed once at startup by
/// merging the persisted snapshot with compiled-in defaults, mutated by
/// the feature operations, and discarded when the page unloads.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Empty means unset (first run prompt not yet answered).
    pub user_name: String,
    pub current_search_engine: SearchEngine,
    /// Insertion order is display order.
    pub bookmarks: Vec<Bookmark>,
    pub theme: Theme,
    pub todos: Vec<Todo>,
    /// Stored in insertion order; display order is recomputed from
    /// `updated_at` at render time.
    pub notes: Vec<Note>,
    /// Note currently open in the editor. Transient, never persisted.
    pub current_note_id: Option<u64>,
    pub wallpaper: Wallpaper,
    /// Selected tab of the wallpaper modal. Transient, never persisted.
    pub wallpaper_tab: WallpaperTab,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from(SettingsSnapshot::default())
    }
}

/// One entry of the bookmark shelf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
    /// Icon reference. May be empty; rendering falls back to
    /// [`Bookmark::icon_or_default`].
    #[serde(default)]
    pub icon: String,
}

impl Bookmark {
    const DEFAULT_ICON: &'static str = "fa-solid fa-earth";

    pub fn icon_or_default(&self) -> &str {
        if self.icon.is_empty() {
            Self::DEFAULT_ICON
        } else {
            &self.icon
        }
    }
}

/// The bookmark shelf shown on first run.
pub fn default_bookmarks() -> Vec<Bookmark> {
    [
        ("YouTube", "https://www.youtube.com", "fab fa-youtube"),
        ("Facebook", "https://www.facebook.com", "fab fa-facebook"),
        ("Instagram", "https://www.instagram.com", "fab fa-instagram"),
        ("TikTok", "https://www.tiktok.com", "fab fa-tiktok"),
        ("Twitter (X)", "https://twitter.com", "fab fa-twitter"),
        ("Reddit", "https://www.reddit.com", "fab fa-reddit"),
        ("Amazon", "https://www.amazon.com", "fab fa-amazon"),
        ("Discord", "https://discord.com", "fab fa-discord"),
        ("Twitch", "https://www.twitch.tv", "fab fa-twitch"),
        ("Gmail", "https://mail.google.com", "fab fa-google"),
    ]
    .into_iter()
    .map(|(name, url, icon)| Bookmark {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// Theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// One to-do entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Creation time in milliseconds. Unique barring two creations in the
    /// same millisecond; that collision is accepted, not corrected.
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: SystemTime,
}

/// One notepad entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Creation time in milliseconds, same uniqueness caveat as
    /// [`Todo::id`].
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// Wallpaper state. `data` and `url` are mutually informative, but only
/// one is the render source at a time; `data` wins when both are present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wallpaper {
    /// Media payload as a data URL. Lives in the blob store, never in the
    /// settings document.
    pub data: Option<String>,
    pub kind: Option<WallpaperKind>,
    /// Provenance of a downloaded wallpaper. Not re-fetched.
    pub url: Option<String>,
    pub blur: Percent,
    pub opacity: Percent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperKind {
    Image,
    Video,
}

/// Tab selection of the wallpaper modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WallpaperTab {
    #[default]
    Upload,
    Pexels,
}

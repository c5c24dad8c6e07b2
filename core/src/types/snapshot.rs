use crate::types::engine::SearchEngine;
use crate::types::percent::Percent;
use crate::types::state::{
    AppState, Bookmark, Note, Theme, Todo, Wallpaper, WallpaperKind, WallpaperTab,
    default_bookmarks,
};
use serde::{Deserialize, Serialize};

/// The serializable subset of [`AppState`] written to the settings store.
///
/// Transient fields (`current_note_id`, `wallpaper_tab`) and the wallpaper
/// media payload are excluded: the payload lives in the blob store, and
/// the settings document must stay small.
///
/// Defaulting is per field: any field missing from the stored document is
/// filled in from [`Default`], so older or hand-edited documents load
/// without migration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub user_name: String,
    pub current_search_engine: SearchEngine,
    pub bookmarks: Vec<Bookmark>,
    pub theme: Theme,
    pub todos: Vec<Todo>,
    pub notes: Vec<Note>,
    pub wallpaper: WallpaperSettings,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            current_search_engine: SearchEngine::default(),
            bookmarks: default_bookmarks(),
            theme: Theme::default(),
            todos: Vec::new(),
            notes: Vec::new(),
            wallpaper: WallpaperSettings::default(),
        }
    }
}

/// Wallpaper metadata as persisted: everything except the media payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperSettings {
    #[serde(rename = "type")]
    pub kind: Option<WallpaperKind>,
    pub url: Option<String>,
    pub blur: Percent,
    pub opacity: Percent,
}

impl From<&AppState> for SettingsSnapshot {
    fn from(state: &AppState) -> Self {
        Self {
            user_name: state.user_name.clone(),
            current_search_engine: state.current_search_engine,
            bookmarks: state.bookmarks.clone(),
            theme: state.theme,
            todos: state.todos.clone(),
            notes: state.notes.clone(),
            wallpaper: WallpaperSettings {
                kind: state.wallpaper.kind,
                url: state.wallpaper.url.clone(),
                blur: state.wallpaper.blur,
                opacity: state.wallpaper.opacity,
            },
        }
    }
}

impl From<SettingsSnapshot> for AppState {
    fn from(snapshot: SettingsSnapshot) -> Self {
        Self {
            user_name: snapshot.user_name,
            current_search_engine: snapshot.current_search_engine,
            bookmarks: snapshot.bookmarks,
            theme: snapshot.theme,
            todos: snapshot.todos,
            notes: snapshot.notes,
            current_note_id: None,
            wallpaper: Wallpaper {
                data: None,
                kind: snapshot.wallpaper.kind,
                url: snapshot.wallpaper.url,
                blur: snapshot.wallpaper.blur,
                opacity: snapshot.wallpaper.opacity,
            },
            wallpaper_tab: WallpaperTab::default(),
        }
    }
}

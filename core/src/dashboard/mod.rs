//! The dashboard facade: the canonical in-memory state plus the feature
//! operations that mutate it and trigger persistence.
//!
//! Operations return render data (counts, sorted views, style strings,
//! navigation targets) instead of touching a UI; the view layer is
//! replaceable and out of scope here. Every mutating operation ends with
//! the save path, which writes the settings snapshot only. The wallpaper
//! blob is written separately on explicit apply/remove so minor changes
//! (adding a to-do) never rewrite a large payload.

use crate::storage::Persistence;
use crate::storage::error::StorageError;
use crate::types::{
    AppState, Bookmark, Config, Note, Percent, SearchEngine, SettingsSnapshot, Theme, Todo,
    Wallpaper, WallpaperKind, WallpaperTab,
};
use base64::Engine as _;
use error::DashboardError;
use log::warn;
use std::time::{SystemTime, UNIX_EPOCH};

pub mod image_session;
pub(crate) mod texts;

pub use image_session::{ImageSearchSession, RequestTicket};

pub mod error {
    use crate::storage::error::StorageError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum DashboardError {
        #[error("Storage error: {0}")]
        Storage(#[from] StorageError),

        #[error("Note has no title or content")]
        EmptyNote,
    }
}

/// Millisecond-resolution creation id. Two items created within the same
/// millisecond collide; accepted, not corrected.
fn timestamp_id(now: SystemTime) -> u64 {
    now.duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
}

fn to_data_url(bytes: &[u8], mime: &str) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{b64}")
}

pub struct Dashboard {
    state: AppState,
    store: Persistence,
}

impl Dashboard {
    /// Opens both stores and performs the two-phase load: the settings
    /// snapshot populates every field first, then an existing wallpaper
    /// blob merges into the `data` slot. Code running between the two
    /// phases must not assume a populated wallpaper.
    pub fn load(config: &Config) -> Result<Self, StorageError> {
        let store = Persistence::open(config)?;

        let state = match store.load_settings() {
            Some(snapshot) => AppState::from(snapshot),
            None => AppState::default(),
        };

        let mut dashboard = Self { state, store };
        dashboard.merge_wallpaper_blob();
        Ok(dashboard)
    }

    fn merge_wallpaper_blob(&mut self) {
        match self.store.load_blob() {
            Ok(Some(data)) => self.state.wallpaper.data = Some(data),
            Ok(None) => {}
            Err(err) => warn!("no wallpaper data loaded: {err}"),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Persists the settings snapshot (never the wallpaper payload).
    pub fn save_state(&self) -> Result<(), StorageError> {
        self.store.save_settings(&SettingsSnapshot::from(&self.state))
    }
}

/// User operations.
impl Dashboard {
    /// Stores the name asked for on first run. Empty input no-ops.
    pub fn set_user_name(&mut self, name: &str) -> Result<(), StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        self.state.user_name = name.to_string();
        self.save_state()
    }

    /// A personalized greeting line, when a name is known.
    pub fn greeting(&self) -> Option<String> {
        if self.state.user_name.is_empty() {
            return None;
        }
        Some(texts::greeting_for(&self.state.user_name))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.state.theme = theme;
        self.save_state()
    }
}

/// Search operations.
impl Dashboard {
    pub fn set_search_engine(&mut self, engine: SearchEngine) -> Result<(), StorageError> {
        self.state.current_search_engine = engine;
        self.save_state()
    }

    /// Navigation target for the current engine. Empty queries produce no
    /// navigation.
    pub fn search_target(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(self.state.current_search_engine.search_url(query))
    }

    /// Placeholder text for the search input, rotated per render.
    pub fn search_placeholder(&self) -> String {
        texts::search_placeholder(self.state.current_search_engine.info().name)
    }
}

/// Bookmark operations.
impl Dashboard {
    /// Appends a bookmark. Name and URL are required; an empty required
    /// field is a silent no-op. URLs are not validated.
    pub fn add_bookmark(&mut self, name: &str, url: &str, icon: &str) -> Result<(), StorageError> {
        let (name, url, icon) = (name.trim(), url.trim(), icon.trim());
        if name.is_empty() || url.is_empty() {
            return Ok(());
        }

        self.state.bookmarks.push(Bookmark {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        });
        self.save_state()
    }

    /// Removes the bookmark at `index`. Out-of-range indexes no-op.
    /// Confirmation is the view layer's job.
    pub fn remove_bookmark(&mut self, index: usize) -> Result<(), StorageError> {
        if index >= self.state.bookmarks.len() {
            return Ok(());
        }
        self.state.bookmarks.remove(index);
        self.save_state()
    }
}

/// To-do operations.
impl Dashboard {
    pub fn add_todo(&mut self, text: &str, now: SystemTime) -> Result<(), StorageError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        self.state.todos.push(Todo {
            id: timestamp_id(now),
            text: text.to_string(),
            completed: false,
            created_at: now,
        });
        self.save_state()
    }

    /// Flips the completed flag of the to-do at `index`. Out-of-range
    /// indexes no-op.
    pub fn toggle_todo(&mut self, index: usize) -> Result<(), StorageError> {
        match self.state.todos.get_mut(index) {
            Some(todo) => {
                todo.completed = !todo.completed;
                self.save_state()
            }
            None => Ok(()),
        }
    }

    pub fn remove_todo(&mut self, index: usize) -> Result<(), StorageError> {
        if index >= self.state.todos.len() {
            return Ok(());
        }
        self.state.todos.remove(index);
        self.save_state()
    }

    /// Number of incomplete to-dos, shown as the shelf badge.
    pub fn incomplete_todo_count(&self) -> usize {
        self.state.todos.iter().filter(|t| !t.completed).count()
    }
}

/// Note operations.
impl Dashboard {
    /// Starts a new note: allocates an id and switches to the editor.
    /// Nothing is persisted until an explicit save.
    pub fn begin_note(&mut self, now: SystemTime) {
        self.state.current_note_id = Some(timestamp_id(now));
    }

    /// Opens an existing note for editing. Unknown ids are ignored.
    pub fn open_note(&mut self, id: u64) -> Option<&Note> {
        let index = self.state.notes.iter().position(|n| n.id == id)?;
        self.state.current_note_id = Some(id);
        Some(&self.state.notes[index])
    }

    /// Saves the note being edited: updates in place when the id already
    /// exists, appends otherwise. A note with neither title nor content
    /// is rejected so the view can surface the alert.
    pub fn save_note(
        &mut self,
        title: &str,
        content: &str,
        now: SystemTime,
    ) -> Result<(), DashboardError> {
        let (title, content) = (title.trim(), content.trim());
        if title.is_empty() && content.is_empty() {
            return Err(DashboardError::EmptyNote);
        }

        let id = self
            .state
            .current_note_id
            .unwrap_or_else(|| timestamp_id(now));

        match self.state.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.title = title.to_string();
                note.content = content.to_string();
                note.updated_at = now;
            }
            None => self.state.notes.push(Note {
                id,
                title: title.to_string(),
                content: content.to_string(),
                created_at: now,
                updated_at: now,
            }),
        }

        self.state.current_note_id = None;
        self.save_state()?;
        Ok(())
    }

    /// Deletes the note being edited. No note open, or an id that no
    /// longer exists, is a no-op.
    pub fn delete_current_note(&mut self) -> Result<(), StorageError> {
        let Some(id) = self.state.current_note_id.take() else {
            return Ok(());
        };
        let Some(index) = self.state.notes.iter().position(|n| n.id == id) else {
            return Ok(());
        };

        self.state.notes.remove(index);
        self.save_state()
    }

    /// Notes in display order: most recently updated first. The stored
    /// order stays insertion order; only this view is sorted.
    pub fn notes_by_recency(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self.state.notes.iter().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        notes
    }
}

/// Wallpaper operations.
impl Dashboard {
    /// Stages an uploaded file as the wallpaper media. The bytes become a
    /// data URL in the `data` slot; nothing is persisted until apply.
    pub fn stage_wallpaper_upload(&mut self, bytes: &[u8], mime: &str) {
        let kind = if mime.starts_with("image/") {
            WallpaperKind::Image
        } else {
            WallpaperKind::Video
        };

        self.state.wallpaper.data = Some(to_data_url(bytes, mime));
        self.state.wallpaper.kind = Some(kind);
        self.state.wallpaper.url = None;
    }

    /// Stages a downloaded image (e.g. a search result) through the same
    /// funnel, keeping the source URL as provenance.
    pub fn stage_wallpaper_from_url(&mut self, bytes: &[u8], mime: &str, url: &str) {
        self.state.wallpaper.data = Some(to_data_url(bytes, mime));
        self.state.wallpaper.kind = Some(WallpaperKind::Image);
        self.state.wallpaper.url = Some(url.to_string());
    }

    /// Applies the staged wallpaper. The blob is written first; a failed
    /// write aborts the apply before the snapshot is saved, so the stored
    /// state keeps its previous wallpaper and the caller can surface the
    /// error.
    pub fn apply_wallpaper(&mut self, blur: u8, opacity: u8) -> Result<(), StorageError> {
        self.state.wallpaper.blur = Percent::from(blur);
        self.state.wallpaper.opacity = Percent::from(opacity);

        // Re-read the slot here: a remove may have cleared it while the
        // modal was open.
        if let Some(data) = self.state.wallpaper.data.clone() {
            self.store.save_blob(&data)?;
        }

        self.save_state()
    }

    /// Clears all wallpaper fields and deletes the stored blob. Removing
    /// when no wallpaper is set leaves state unchanged.
    pub fn remove_wallpaper(&mut self) -> Result<(), StorageError> {
        if self.state.wallpaper == Wallpaper::default() {
            return Ok(());
        }

        self.state.wallpaper = Wallpaper::default();
        self.store.delete_blob()?;
        self.save_state()
    }

    /// The media source to render: staged/stored data preferred over the
    /// provenance URL.
    pub fn wallpaper_source(&self) -> Option<&str> {
        self.state
            .wallpaper
            .data
            .as_deref()
            .or(self.state.wallpaper.url.as_deref())
    }

    /// CSS filter string for the wallpaper layer.
    pub fn wallpaper_filter(&self) -> String {
        format!("blur({}px)", self.state.wallpaper.blur)
    }

    /// Overlay transparency in `0.0..=1.0`.
    pub fn overlay_opacity(&self) -> f32 {
        u8::from(self.state.wallpaper.opacity) as f32 / 100.0
    }

    pub fn set_wallpaper_tab(&mut self, tab: WallpaperTab) {
        // Transient selection, deliberately not saved.
        self.state.wallpaper_tab = tab;
    }
}

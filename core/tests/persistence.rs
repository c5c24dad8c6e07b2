//! End-to-end persistence checks through the public API: a session's
//! state survives a reload, split correctly across the two backends.

use spacetab_core::Dashboard;
use spacetab_core::types::{Config, SearchEngine, Theme};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

fn at_millis(ms: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_millis(ms)
}

#[test]
fn full_session_round_trips_across_reload() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        base_path: temp_dir.path().to_path_buf(),
    };

    {
        let mut dashboard = Dashboard::load(&config).unwrap();
        dashboard.set_user_name("Ada").unwrap();
        dashboard.set_theme(Theme::Dark).unwrap();
        dashboard.set_search_engine(SearchEngine::Bing).unwrap();
        dashboard
            .add_bookmark("Docs", "https://docs.rs", "fas fa-book")
            .unwrap();
        dashboard.add_todo("Buy milk", at_millis(1)).unwrap();
        dashboard.begin_note(at_millis(2));
        dashboard.save_note("Plan", "ship it", at_millis(2)).unwrap();
        dashboard.stage_wallpaper_upload(&[1, 2, 3], "image/png");
        dashboard.apply_wallpaper(20, 50).unwrap();
    }

    let dashboard = Dashboard::load(&config).unwrap();
    let state = dashboard.state();

    assert_eq!(state.user_name, "Ada");
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.current_search_engine, SearchEngine::Bing);
    assert_eq!(state.bookmarks.len(), 11);
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.notes.len(), 1);
    assert_eq!(
        state.wallpaper.data.as_deref(),
        Some("data:image/png;base64,AQID")
    );
    assert_eq!(state.current_note_id, None);
}

#[test]
fn settings_document_never_contains_the_media_payload() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        base_path: temp_dir.path().to_path_buf(),
    };

    {
        let mut dashboard = Dashboard::load(&config).unwrap();
        dashboard.stage_wallpaper_upload(&[1, 2, 3], "image/png");
        dashboard.apply_wallpaper(10, 10).unwrap();
    }

    let raw = std::fs::read_to_string(config.settings_path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let wallpaper = doc.get("wallpaper").unwrap();
    assert!(wallpaper.get("data").is_none());
    assert!(wallpaper.get("type").is_some());
    assert!(!raw.contains("base64"));
}

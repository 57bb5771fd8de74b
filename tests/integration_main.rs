use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shelf::app::config::{PersistentState, UserConfig};
use shelf::app::{inputs, App};
use shelf::grouping::{
    FlatItem, GroupField, GroupedView, Settings, SortCriterion, SortField, SortOrder,
};
use shelf::library::{Album, MemoryLibrary};
use shelf::popup::lastfm::LastfmPhase;
use shelf::theme::Theme;

fn album(artist: &str, name: &str, genre: &str, date: &str) -> Album {
    let mut a = Album::new(artist, name);
    a.genre = genre.to_string();
    a.original_date = date.to_string();
    a.added_at = Utc.with_ymd_and_hms(2024, 12, 1, 12, 0, 0).unwrap();
    a
}

fn library() -> Vec<Album> {
    vec![
        album("Slowdive", "Souvlaki", "Shoegaze", "1993-05-17"),
        album("Low", "Things We Lost in the Fire", "Slowcore", "2001-01-22"),
        album("Ride", "Nowhere", "Shoegaze", "1990-10-15"),
        album("Codeine", "Frigid Stars", "Slowcore", "1990"),
        album("Mystery", "Untagged", "", ""),
    ]
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 11)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Helper to create a test app instance
fn create_test_app() -> App {
    let mut app = App::new(
        UserConfig::default(),
        PersistentState::default(),
        Theme::default(),
        Box::new(MemoryLibrary::new(library())),
    );
    app.refresh_at(now()).unwrap();
    app
}

fn press(app: &mut App, code: KeyCode) {
    inputs::handle_event(KeyEvent::new(code, KeyModifiers::NONE), app);
}

fn headers(items: &[FlatItem]) -> Vec<(String, usize)> {
    items
        .iter()
        .filter_map(|item| match item {
            FlatItem::Header { header, level } => Some((header.clone(), *level)),
            FlatItem::Album(_) => None,
        })
        .collect()
}

#[test]
fn test_app_initialization() {
    let app = create_test_app();
    assert!(app.is_running);
    assert!(app.popup.is_none());
    assert_eq!(app.browser.album_count(), 5);
    assert!(app.load_error.is_none());
}

#[test]
fn test_genre_year_preset_nests_groups() {
    let mut app = create_test_app();
    assert!(app.select_preset("Genre › Year"));
    app.regroup_at(now());

    let hs = headers(app.browser.items());
    assert_eq!(
        hs,
        vec![
            ("Shoegaze".to_string(), 0),
            ("1990".to_string(), 1),
            ("1993".to_string(), 1),
            ("Slowcore".to_string(), 0),
            ("1990".to_string(), 1),
            ("2001".to_string(), 1),
            ("Unknown Genre".to_string(), 0),
            ("Unknown".to_string(), 1),
        ]
    );
}

#[test]
fn test_flatten_order_headers_before_albums() {
    let settings = Settings::new(
        vec![GroupField::Genre],
        vec![SortCriterion::new(SortField::Artist, SortOrder::Ascending)],
    );
    let view = GroupedView::build(library(), &settings, now());

    let rows: Vec<String> = view
        .items
        .iter()
        .map(|item| match item {
            FlatItem::Header { header, .. } => format!("# {}", header),
            FlatItem::Album(a) => a.artist.clone(),
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            "# Shoegaze",
            "Ride",
            "Slowdive",
            "# Slowcore",
            "Codeine",
            "Low",
            "# Unknown Genre",
            "Mystery",
        ]
    );
}

#[test]
fn test_navigation_keys() {
    let mut app = create_test_app();
    assert!(app.select_preset("By Artist"));
    app.regroup_at(now());
    assert_eq!(app.browser.selected(), 0);

    press(&mut app, KeyCode::Char('j'));
    assert!(app.browser.selected_album().is_some());

    press(&mut app, KeyCode::Char('n'));
    assert!(app.browser.selected_item().unwrap().is_header());
    let at = app.browser.selected();

    press(&mut app, KeyCode::Char('N'));
    assert!(app.browser.selected() < at);
    assert!(app.browser.selected_item().unwrap().is_header());

    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.browser.selected(), 0);
}

#[test]
fn test_cursor_follows_album_across_presets() {
    let mut app = create_test_app();
    assert!(app.select_preset("By Artist"));
    app.regroup_at(now());

    let pos = app
        .browser
        .items()
        .iter()
        .position(|i| i.album().is_some_and(|a| a.artist == "Low"))
        .unwrap();
    app.browser.select(pos);

    assert!(app.select_preset("By Year"));
    assert_eq!(app.browser.selected_album().unwrap().artist, "Low");
}

#[test]
fn test_help_and_quit() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_keyhints);

    // First q closes the help popup
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.show_keyhints);
    assert!(app.is_running);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.is_running);
}

#[test]
fn test_lastfm_popup_swallows_keys() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('L'));
    assert_eq!(app.popup.as_ref().unwrap().current(), &LastfmPhase::NotLinked);

    // q goes to the popup, not the app
    press(&mut app, KeyCode::Char('q'));
    assert!(app.is_running);

    // No API key configured: Enter fails, Backspace returns
    press(&mut app, KeyCode::Enter);
    assert!(matches!(
        app.popup.as_ref().unwrap().current(),
        LastfmPhase::Failed { .. }
    ));
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.popup.as_ref().unwrap().current(), &LastfmPhase::NotLinked);

    press(&mut app, KeyCode::Esc);
    assert!(app.popup.is_none());
}

#[test]
fn test_settings_survive_persistent_state() {
    let mut app = create_test_app();
    assert!(app.select_preset("By Label"));
    app.state.set_settings(&app.settings);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    app.state.save_to(&path).unwrap();

    let restored = PersistentState::load_from(&path);
    let settings = restored.settings().unwrap();
    assert_eq!(settings.group_fields, vec![GroupField::Label, GroupField::Artist]);
    assert_eq!(settings, app.settings);
}

#[test]
fn test_legacy_state_columns() {
    let state = PersistentState {
        group_fields: "[1, 3]".to_string(),
        sort_criteria: r#"[{"field": 3, "order": 1}]"#.to_string(),
        ..Default::default()
    };

    let settings = state.settings().unwrap();
    assert_eq!(settings.group_fields, vec![GroupField::Genre, GroupField::Year]);
    assert_eq!(
        settings.sort_criteria,
        vec![SortCriterion::new(SortField::Artist, SortOrder::Descending)]
    );
}

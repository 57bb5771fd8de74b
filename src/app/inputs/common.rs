use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    // Quit ('q')
    if keys.matches(key, &keys.quit) {
        // Close the help popup first, then quit
        if app.show_keyhints {
            app.show_keyhints = false;
        } else {
            app.quit();
        }
        return true;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        app.show_keyhints = !app.show_keyhints;
        return true;
    }

    if key.code == KeyCode::Esc && app.show_keyhints {
        app.show_keyhints = false;
        return true;
    }

    if keys.matches(key, &keys.reload) {
        match app.refresh() {
            Ok(()) => {
                let count = app.browser.album_count();
                app.show_toast(&format!("↻ {} albums", count));
            }
            Err(e) => {
                warn!("{:#}", e);
                app.show_toast("⚠ Library could not be read");
            }
        }
        return true;
    }

    false
}

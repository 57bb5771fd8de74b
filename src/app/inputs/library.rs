use crate::app::App;
use crossterm::event::KeyEvent;

pub fn handle_library_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone(); // Clone keys to avoid borrowing app

    if keys.matches(key, &keys.nav_down) || keys.matches(key, &keys.nav_down_alt) {
        app.browser.move_down();
        return true;
    }

    if keys.matches(key, &keys.nav_up) || keys.matches(key, &keys.nav_up_alt) {
        app.browser.move_up();
        return true;
    }

    // Check prev before next: "N" must not fall through to "n"
    if keys.matches(key, &keys.prev_group) {
        app.browser.prev_header();
        return true;
    }

    if keys.matches(key, &keys.next_group) {
        app.browser.next_header();
        return true;
    }

    if keys.matches(key, &keys.open_album) {
        let details = app.browser.selected_album().map(|album| {
            let date = album.best_date();
            format!(
                "💿 {} – {} · {} tracks{}",
                album.artist,
                album.name,
                album.track_count,
                if date.is_empty() { String::new() } else { format!(" · {}", date) }
            )
        });
        if let Some(message) = details {
            app.show_toast(&message);
        }
        return true;
    }

    if keys.matches(key, &keys.next_preset) {
        app.next_preset();
        return true;
    }

    if keys.matches(key, &keys.prev_preset) {
        app.prev_preset();
        return true;
    }

    if keys.matches(key, &keys.toggle_group_order) {
        app.toggle_group_order();
        return true;
    }

    if keys.matches(key, &keys.cycle_date_field) {
        app.cycle_date_field();
        return true;
    }

    if keys.matches(key, &keys.open_lastfm) {
        app.open_lastfm();
        return true;
    }

    false
}

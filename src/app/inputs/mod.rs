use crate::app::App;
use crossterm::event::{KeyEvent, KeyEventKind};

pub mod common;
pub mod library;
pub mod popup;

pub fn handle_event(key: KeyEvent, app: &mut App) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    // 1. Priority: an open popup captures every key
    if popup::handle_popup_events(key, app) {
        return;
    }

    // 2. Common/Global Keys (Quit, Help, Reload)
    if common::handle_common_events(key, app) {
        return;
    }

    // 3. Browser
    library::handle_library_events(key, app);
}

use crate::app::App;
use crate::popup::lastfm::LastfmEvent;
use crate::popup::PopupInput;
use crossterm::event::KeyEvent;

/// Map keys onto popup input. Returns false when no popup is open.
pub fn handle_popup_events(key: KeyEvent, app: &mut App) -> bool {
    if app.popup.is_none() {
        return false;
    }
    let keys = &app.keys;

    let input = if keys.matches(key, &keys.popup_close) {
        Some(PopupInput::Close)
    } else if keys.matches(key, &keys.popup_back) {
        Some(PopupInput::Back)
    } else if keys.matches(key, &keys.popup_confirm) {
        Some(PopupInput::Event(LastfmEvent::Confirm))
    } else if keys.matches(key, &keys.unlink) {
        Some(PopupInput::Event(LastfmEvent::Unlink))
    } else {
        None
    };

    if let Some(input) = input {
        app.dispatch_popup(input);
    }
    // Swallow everything else while the popup is up
    true
}

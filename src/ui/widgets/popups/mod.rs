use crate::app::App;
use ratatui::Frame;

pub mod help;
pub mod phase;
pub mod toast;

pub fn render(f: &mut Frame, app: &App) {
    // TOAST NOTIFICATION
    if app.toast.is_some() {
        toast::render(f, app);
    }

    // PHASE POPUP (Last.fm)
    if let Some(ref machine) = app.popup {
        phase::render(f, machine, &app.theme);
    }

    // FOOTER / WHICHKEY POPUP
    if app.show_keyhints && app.popup.is_none() {
        help::render(f, app);
    }
}

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub mod cli;
pub mod config;
pub mod inputs;
pub mod keys;
pub mod state;

pub use state::{AlbumBrowser, Toast};

use crate::grouping::{GroupedView, Settings};
use crate::library::AlbumSource;
use crate::popup::lastfm::{auth_url, LastfmEffect, LastfmEvent, LastfmPhase};
use crate::popup::{PhaseMachine, PopupInput};
use crate::theme::Theme;
use config::{get_default_presets, PersistentState, UserConfig};
use keys::KeyConfig;

pub struct App {
    pub is_running: bool,
    pub browser: AlbumBrowser,
    pub settings: Settings,
    pub presets: Vec<Settings>,
    /// Index into `presets` while the settings still match a preset
    pub preset_idx: Option<usize>,
    pub popup: Option<PhaseMachine<LastfmPhase>>,
    pub keys: KeyConfig,
    pub theme: Theme,
    pub toast: Option<Toast>,
    pub show_keyhints: bool,
    pub config: UserConfig,
    pub state: PersistentState,
    /// Last library error, shown instead of the list
    pub load_error: Option<String>,
    library: Box<dyn AlbumSource>,
}

impl App {
    pub fn new(
        config: UserConfig,
        state: PersistentState,
        theme: Theme,
        library: Box<dyn AlbumSource>,
    ) -> Self {
        let mut presets = get_default_presets();
        presets.extend(state.user_presets());

        // Saved settings win; otherwise fall back to the last named preset
        let preset_idx = presets
            .iter()
            .position(|p| p.name.as_deref() == Some(state.last_preset_name.as_str()));
        let settings = match state.settings() {
            Some(saved) => saved,
            None => preset_idx
                .and_then(|i| presets.get(i).cloned())
                .or_else(|| presets.first().cloned())
                .unwrap_or_default(),
        };
        let preset_idx = presets.iter().position(|p| *p == settings);

        Self {
            is_running: true,
            browser: AlbumBrowser::new(),
            settings,
            presets,
            preset_idx,
            popup: None,
            keys: config.keys.clone(),
            theme,
            toast: None,
            show_keyhints: false,
            config,
            state,
            load_error: None,
            library,
        }
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// Re-read the library and regroup
    pub fn refresh(&mut self) -> Result<()> {
        self.refresh_at(Self::now())
    }

    /// Fetch and regroup in one pass. On failure the previous view stays up.
    pub fn refresh_at(&mut self, now: NaiveDateTime) -> Result<()> {
        match GroupedView::refresh(self.library.as_ref(), &self.settings, now) {
            Ok(view) => {
                info!("Library refreshed: {} albums", view.album_count());
                self.load_error = None;
                self.browser.set_view(view);
                Ok(())
            }
            Err(e) => {
                self.load_error = Some(e.to_string());
                Err(e).context("Failed to refresh library")
            }
        }
    }

    /// Regroup after a settings change (re-reads the library)
    pub fn regroup(&mut self) {
        self.regroup_at(Self::now());
    }

    pub fn regroup_at(&mut self, now: NaiveDateTime) {
        if let Err(e) = self.refresh_at(now) {
            warn!("{:#}", e);
        }
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.preset_idx = self.presets.iter().position(|p| *p == settings);
        self.settings = settings;
        self.regroup();
    }

    pub fn select_preset(&mut self, name: &str) -> bool {
        match self.presets.iter().find(|p| p.name.as_deref() == Some(name)) {
            Some(preset) => {
                let preset = preset.clone();
                self.apply_settings(preset);
                true
            }
            None => false,
        }
    }

    fn cycle_preset(&mut self, forward: bool) {
        if self.presets.is_empty() {
            return;
        }
        let len = self.presets.len();
        let next = match (self.preset_idx, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        let preset = self.presets[next].clone();
        let name = preset.name.clone().unwrap_or_default();
        info!("Switched to preset '{}'", name);
        self.apply_settings(preset);
        self.show_toast(&format!("🗂️ {}", name));
    }

    pub fn next_preset(&mut self) {
        self.cycle_preset(true);
    }

    pub fn prev_preset(&mut self) {
        self.cycle_preset(false);
    }

    pub fn toggle_group_order(&mut self) {
        let mut settings = self.settings.clone();
        settings.group_sort_order = settings.group_sort_order.toggled();
        let arrow = settings.group_sort_order.arrow();
        self.apply_settings(settings);
        self.show_toast(&format!("Groups {}", arrow));
    }

    pub fn cycle_date_field(&mut self) {
        let mut settings = self.settings.clone();
        settings.group_date_field = settings.group_date_field.next();
        let label = settings.group_date_field.label();
        self.apply_settings(settings);
        self.show_toast(&format!("📅 {}", label));
    }

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast::new(message, Duration::from_millis(self.config.toast_ms)));
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn open_lastfm(&mut self) {
        let initial = LastfmPhase::initial(self.state.lastfm_username.as_deref());
        match self.popup.as_mut() {
            Some(machine) => machine.reset(initial),
            None => self.popup = Some(PhaseMachine::new(initial)),
        }
    }

    /// Feed the popup, resolving any effects it emits (which may feed it
    /// again) until it settles or closes.
    pub fn dispatch_popup(&mut self, input: PopupInput<LastfmEvent>) {
        let mut pending = Some(input);
        while let Some(input) = pending.take() {
            let Some(machine) = self.popup.as_mut() else {
                return;
            };
            let signal = machine.handle(input);
            let closed = signal.is_closed();
            if let Some(effect) = signal.into_effect() {
                pending = self.resolve_lastfm(effect).map(PopupInput::Event);
            }
            if closed {
                self.popup = None;
                return;
            }
        }
    }

    fn resolve_lastfm(&mut self, effect: LastfmEffect) -> Option<LastfmEvent> {
        match effect {
            LastfmEffect::RequestToken => {
                if self.config.lastfm_api_key.is_empty() {
                    return Some(LastfmEvent::AuthFailed(
                        "Set lastfm_api_key in config.toml".to_string(),
                    ));
                }
                let token = format!("{:016x}", Local::now().timestamp_millis());
                let url = auth_url(&self.config.lastfm_api_key, &token);
                Some(LastfmEvent::TokenIssued {
                    token,
                    auth_url: url,
                })
            }
            LastfmEffect::OpenBrowser(url) => {
                info!("Last.fm authorization URL: {}", url);
                None
            }
            LastfmEffect::FetchSession(_token) => {
                if self.config.lastfm_user.is_empty() {
                    Some(LastfmEvent::AuthFailed(
                        "Set lastfm_user in config.toml".to_string(),
                    ))
                } else {
                    Some(LastfmEvent::Authorized {
                        username: self.config.lastfm_user.clone(),
                    })
                }
            }
            LastfmEffect::SessionLinked(username) => {
                self.show_toast(&format!("🎧 Linked as {}", username));
                self.state.lastfm_username = Some(username);
                None
            }
            LastfmEffect::Unlink => {
                self.state.lastfm_username = None;
                self.show_toast("Last.fm unlinked");
                None
            }
        }
    }

    /// Save settings + session into state.toml
    pub fn persist(&mut self) {
        self.state.set_settings(&self.settings);
        self.state.save();
    }

    pub fn quit(&mut self) {
        self.is_running = false;
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("is_running", &self.is_running)
            .field("settings", &self.settings)
            .field("albums", &self.browser.album_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{Album, LibraryError, MemoryLibrary};
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct Broken;

    impl AlbumSource for Broken {
        fn all_albums(&self) -> Result<Vec<Album>, LibraryError> {
            Err(LibraryError::Io {
                path: PathBuf::from("/nowhere.json"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            })
        }
    }

    /// Serves albums until `broken` is set
    struct Flaky {
        broken: Rc<Cell<bool>>,
    }

    impl AlbumSource for Flaky {
        fn all_albums(&self) -> Result<Vec<Album>, LibraryError> {
            if self.broken.get() {
                return Broken.all_albums();
            }
            Ok(vec![Album::new("Burial", "Untrue")])
        }
    }

    fn app_with(library: Box<dyn AlbumSource>) -> App {
        App::new(UserConfig::default(), PersistentState::default(), Theme::default(), library)
    }

    #[test]
    fn test_starts_on_default_preset() {
        let app = app_with(Box::new(MemoryLibrary::default()));
        assert_eq!(app.settings.name.as_deref(), Some(config::DEFAULT_PRESET));
        assert_eq!(app.preset_idx, Some(0));
    }

    #[test]
    fn test_refresh_failure_keeps_error() {
        let mut app = app_with(Box::new(Broken));
        assert!(app.refresh().is_err());
        assert!(app.load_error.as_deref().unwrap().contains("nowhere.json"));
        assert!(app.browser.is_empty());
    }

    #[test]
    fn test_failed_regroup_keeps_previous_view() {
        let broken = Rc::new(Cell::new(false));
        let mut app = app_with(Box::new(Flaky { broken: Rc::clone(&broken) }));
        app.refresh().unwrap();
        assert_eq!(app.browser.album_count(), 1);

        broken.set(true);
        assert!(app.select_preset("By Artist"));
        assert!(app.load_error.is_some());
        assert_eq!(app.browser.album_count(), 1);

        broken.set(false);
        app.refresh().unwrap();
        assert!(app.load_error.is_none());
    }

    #[test]
    fn test_preset_cycling_wraps() {
        let mut app = app_with(Box::new(MemoryLibrary::default()));
        let count = app.presets.len();
        app.prev_preset();
        assert_eq!(app.preset_idx, Some(count - 1));
        app.next_preset();
        assert_eq!(app.preset_idx, Some(0));
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_select_preset_by_name() {
        let mut app = app_with(Box::new(MemoryLibrary::default()));
        assert!(app.select_preset("By Year"));
        assert_eq!(app.settings.name.as_deref(), Some("By Year"));
        assert!(!app.select_preset("Nope"));
        assert_eq!(app.settings.name.as_deref(), Some("By Year"));
    }

    #[test]
    fn test_tweaking_settings_leaves_preset() {
        let mut app = app_with(Box::new(MemoryLibrary::default()));
        app.toggle_group_order();
        assert_eq!(app.preset_idx, None);
        app.toggle_group_order();
        assert_eq!(app.preset_idx, Some(0));
    }

    #[test]
    fn test_lastfm_without_api_key_fails_gracefully() {
        let mut app = app_with(Box::new(MemoryLibrary::default()));
        app.open_lastfm();
        app.dispatch_popup(PopupInput::Event(LastfmEvent::Confirm));
        let popup = app.popup.as_ref().unwrap();
        assert!(matches!(popup.current(), LastfmPhase::Failed { .. }));

        app.dispatch_popup(PopupInput::Close);
        assert!(app.popup.is_none());
    }

    #[test]
    fn test_lastfm_link_and_unlink() {
        let mut config = UserConfig::default();
        config.lastfm_api_key = "key".to_string();
        config.lastfm_user = "rj".to_string();
        let mut app = App::new(config, PersistentState::default(), Theme::default(), Box::new(MemoryLibrary::default()));

        app.open_lastfm();
        app.dispatch_popup(PopupInput::Event(LastfmEvent::Confirm));
        assert!(matches!(
            app.popup.as_ref().unwrap().current(),
            LastfmPhase::WaitingForCallback { .. }
        ));

        app.dispatch_popup(PopupInput::Event(LastfmEvent::Confirm));
        assert_eq!(app.state.lastfm_username.as_deref(), Some("rj"));

        app.dispatch_popup(PopupInput::Event(LastfmEvent::Unlink));
        assert_eq!(app.state.lastfm_username, None);
        let popup = app.popup.as_ref().unwrap();
        assert_eq!(popup.current(), &LastfmPhase::NotLinked);
        assert_eq!(popup.history_len(), 0);
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// User-rebindable keys (config.toml `[keys]`) ⌨️
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub toggle_keyhints: String,
    pub reload: String,

    // Browser
    pub nav_up: String,
    pub nav_up_alt: String,
    pub nav_down: String,
    pub nav_down_alt: String,
    pub next_group: String,
    pub prev_group: String,
    pub open_album: String,

    // Grouping
    pub next_preset: String,
    pub prev_preset: String,
    pub toggle_group_order: String,
    pub cycle_date_field: String,

    // Popups
    pub open_lastfm: String,
    pub popup_confirm: String,
    pub popup_back: String,
    pub popup_close: String,
    pub unlink: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            toggle_keyhints: "?".to_string(),
            reload: "r".to_string(),

            nav_up: "k".to_string(),
            nav_up_alt: "Up".to_string(),
            nav_down: "j".to_string(),
            nav_down_alt: "Down".to_string(),
            next_group: "n".to_string(),
            prev_group: "N".to_string(),
            open_album: "Enter".to_string(),

            next_preset: "Tab".to_string(),
            prev_preset: "BackTab".to_string(),
            toggle_group_order: "o".to_string(),
            cycle_date_field: "d".to_string(),

            open_lastfm: "L".to_string(),
            popup_confirm: "Enter".to_string(),
            popup_back: "Backspace".to_string(),
            popup_close: "Esc".to_string(),
            unlink: "u".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        let code = match key_str {
            "Space" => KeyCode::Char(' '),
            "Enter" => KeyCode::Enter,
            "Backspace" => KeyCode::Backspace,
            "Esc" => KeyCode::Esc,
            "Tab" => KeyCode::Tab,
            "BackTab" => KeyCode::BackTab,
            "Up" => KeyCode::Up,
            "Down" => KeyCode::Down,
            "Left" => KeyCode::Left,
            "Right" => KeyCode::Right,
            s => {
                let mut chars = s.chars();
                return match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_uppercase() => {
                        // Some terminals report Shift+n as 'n' with SHIFT
                        event.code == KeyCode::Char(ch)
                            || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                                && event.modifiers.contains(KeyModifiers::SHIFT))
                    }
                    (Some(ch), None) => event.code == KeyCode::Char(ch),
                    _ => false,
                };
            }
        };
        event.code == code
    }

    /// Short label for footers and the help popup
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}

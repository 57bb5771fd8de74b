use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Palette used by every widget (Catppuccin Mocha by default) 🎨
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
            cyan: Color::Rgb(148, 226, 213),
        }
    }
}

impl Theme {
    /// Colour for a group header at `level` (cycles for deep nesting)
    pub fn header_color(&self, level: usize) -> Color {
        match level % 4 {
            0 => self.magenta,
            1 => self.blue,
            2 => self.cyan,
            _ => self.green,
        }
    }
}

// Helper for serialization/deserialization
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn get_theme_path() -> PathBuf {
    crate::app::config::AppConfig::get_config_dir().join("theme.toml")
}

pub fn load_current_theme() -> Theme {
    load_theme_from(&get_theme_path())
}

/// Nested `[theme]` table first, flat file second, default otherwise
pub fn load_theme_from(path: &Path) -> Theme {
    let Ok(content) = fs::read_to_string(path) else {
        return Theme::default();
    };

    if let Ok(wrapper) = toml::from_str::<ThemeFile>(&content) {
        return wrapper.theme;
    }
    if let Ok(theme) = toml::from_str::<Theme>(&content) {
        return theme;
    }

    warn!("Ignoring unreadable theme file {}", path.display());
    Theme::default()
}

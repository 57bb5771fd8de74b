use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod persistence;
pub mod presets;
pub mod user;

pub use persistence::PersistentState;
pub use presets::{get_default_presets, DEFAULT_PRESET};
pub use user::UserConfig;

pub struct AppConfig; // Namespace only

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let xdg_dir = home.join(".config").join("shelf");

        // Ensure it exists
        if !xdg_dir.exists() {
            let _ = fs::create_dir_all(&xdg_dir);
        }

        xdg_dir
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_state_path() -> PathBuf {
        Self::get_config_dir().join("state.toml")
    }

    pub fn get_log_dir() -> PathBuf {
        Self::get_config_dir().join("logs")
    }

    /// Load both config.toml and state.toml
    pub fn load() -> (UserConfig, PersistentState) {
        Self::load_from(&Self::get_config_dir())
    }

    pub fn load_from(dir: &Path) -> (UserConfig, PersistentState) {
        let config_path = dir.join("config.toml");

        // 1. User config (written with defaults on first run)
        let user_config = match fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring invalid {}: {}", config_path.display(), e);
                UserConfig::default()
            }),
            Err(_) => {
                let c = UserConfig::default();
                if let Ok(content) = toml::to_string_pretty(&c) {
                    if fs::write(&config_path, content).is_ok() {
                        info!("Wrote default config to {}", config_path.display());
                    }
                }
                c
            }
        };

        // 2. Session state
        let state = PersistentState::load_from(&dir.join("state.toml"));

        (user_config, state)
    }

    pub fn default_config_toml() -> String {
        toml::to_string_pretty(&UserConfig::default()).unwrap_or_default()
    }
}

use serde::{Deserialize, Serialize};

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub keys: crate::app::keys::KeyConfig,
    #[serde(default = "default_library_path")]
    pub library_path: String,
    /// Last.fm API key used to build the authorization URL
    #[serde(default)]
    pub lastfm_api_key: String,
    /// Account name reported once the browser step is approved
    #[serde(default)]
    pub lastfm_user: String,
    /// How long toasts stay up
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

fn default_library_path() -> String {
    super::AppConfig::get_config_dir()
        .join("library.json")
        .to_string_lossy()
        .to_string()
}

fn default_toast_ms() -> u64 {
    2500
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            keys: crate::app::keys::KeyConfig::default(),
            library_path: default_library_path(),
            lastfm_api_key: String::new(),
            lastfm_user: String::new(),
            toast_ms: default_toast_ms(),
        }
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::grouping::Settings;

/// Automatically saved session state
/// stored in `state.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistentState {
    #[serde(default)]
    pub last_preset_name: String,
    /// Combined settings JSON, or a bare JSON array of group field codes
    /// when written by older versions
    #[serde(default)]
    pub group_fields: String,
    /// JSON array of sort criteria (older versions only read this one)
    #[serde(default)]
    pub sort_criteria: String,
    #[serde(default)]
    pub lastfm_username: Option<String>,
    /// User presets, one combined settings JSON each
    #[serde(default)]
    pub presets: Vec<String>,
}

impl Default for PersistentState {
    fn default() -> Self {
        Self {
            last_preset_name: super::presets::DEFAULT_PRESET.to_string(),
            group_fields: String::new(),
            sort_criteria: String::new(),
            lastfm_username: None,
            presets: Vec::new(),
        }
    }
}

impl PersistentState {
    /// Current view settings; `None` when nothing was ever saved
    pub fn settings(&self) -> Option<Settings> {
        if self.group_fields.trim().is_empty() && self.sort_criteria.trim().is_empty() {
            return None;
        }
        Some(Settings::decode(&self.group_fields, &self.sort_criteria))
    }

    pub fn set_settings(&mut self, settings: &Settings) {
        let (group_fields, sort_criteria) = settings.encode();
        self.group_fields = group_fields;
        self.sort_criteria = sort_criteria;
        if let Some(name) = &settings.name {
            self.last_preset_name = name.clone();
        }
    }

    /// Named user presets (entries without a name are skipped)
    pub fn user_presets(&self) -> Vec<Settings> {
        self.presets
            .iter()
            .map(|json| Settings::from_json(json))
            .filter(|s| s.name.is_some())
            .collect()
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!("Corrupt state file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize state")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Saved state to {}", path.display());
        Ok(())
    }

    pub fn save(&self) {
        let path = super::AppConfig::get_state_path();
        if let Err(e) = self.save_to(&path) {
            warn!("{:#}", e);
        }
    }
}

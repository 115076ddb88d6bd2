//! App Configuration
//!
//! Read once at startup from the JSON block in `index.html`:
//!
//! ```html
//! <script type="application/json" id="checklist-config">
//!   { "checklist": { "initial_snapshot": "zero", "rounding": "half_up" }, "seed": "default" }
//! </script>
//! ```

use checklist_core::ChecklistConfig;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// Id of the `<script>` element holding the config JSON
pub const CONFIG_ELEMENT_ID: &str = "checklist-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Snapshot and rounding policies for the checklist view
    pub checklist: ChecklistConfig,
    /// Name of the seed loaded at startup (see `checklist_core::seeds`)
    pub seed: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            checklist: ChecklistConfig::default(),
            seed: "default".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid checklist config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Load the config from the page. A missing or blank element means defaults.
pub fn load() -> Result<AppConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => AppConfig::from_json(&raw),
        _ => Ok(AppConfig::default()),
    }
}

use serde::{Deserialize, Serialize};
use tracing::warn;

use username_filter::ConfigStore;

/// Name of the settings file inside the application configuration
/// directory.
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default = "default_anti_spam_mode")]
    pub anti_spam_mode: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            anti_spam_mode: default_anti_spam_mode(),
        }
    }
}

fn default_anti_spam_mode() -> String {
    "smart".to_string()
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Load settings from the configuration directory.
///
/// If the file does not exist default settings are returned and a warning
/// is emitted, so the application can run before any setting has been
/// persisted.
pub async fn load(store: &ConfigStore) -> anyhow::Result<AppSettings> {
    if !store.exists(SETTINGS_FILE).await {
        warn!("settings file not found; using defaults");
        return Ok(AppSettings::default());
    }

    let contents = store
        .read_to_string(SETTINGS_FILE)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read settings file: {e}"))?;

    let settings: AppSettings = serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse settings file: {e}"))?;

    Ok(settings)
}

/// Persist settings as pretty-printed JSON in the configuration directory.
pub async fn save(store: &ConfigStore, settings: &AppSettings) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    store
        .write(SETTINGS_FILE, &json)
        .await
        .map_err(|e| anyhow::anyhow!("failed to write settings file: {e}"))?;
    Ok(())
}

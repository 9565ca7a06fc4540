use crate::config::types::{Credentials, Settings};
use crate::error::ConfigError;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const SETTINGS_FILE: &str = "settings.json";

/// Read `settings.json` from the data directory. A missing file is the
/// default (empty) settings.
pub fn load_settings(data_dir: &Path) -> Result<Settings, ConfigError> {
    let path = data_dir.join(SETTINGS_FILE);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Json { path, source })
}

/// Environment values take precedence over the settings file.
pub fn apply_env_overrides(
    mut settings: Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(key) = lookup("STEAM_API_KEY").filter(|v| !v.is_empty()) {
        settings.steam_api_key = key;
    }
    if let Some(id) = lookup("STEAM_ID").filter(|v| !v.is_empty()) {
        settings.steam_id = id;
    }
    settings
}

pub fn load_credentials(data_dir: &Path) -> Result<Credentials, ConfigError> {
    let settings = load_settings(data_dir)?;
    let settings = apply_env_overrides(settings, |name| std::env::var(name).ok());
    Credentials::from_settings(&settings)
}

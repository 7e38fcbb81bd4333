use std::fs;
use std::path::PathBuf;

use crate::domain::error::{AppError, Result};
use crate::domain::settings::Settings;

/// JSON-file persistence for the user settings (model selection, theme).
///
/// Read on dialog open, written on explicit save; a missing file means
/// defaults. API keys never pass through here.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|err| AppError::ConfigError(format!("Failed to read settings: {}", err)))?;
        serde_json::from_str(&content)
            .map_err(|err| AppError::ConfigError(format!("Failed to parse settings: {}", err)))
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(settings)
            .map_err(|err| AppError::ConfigError(format!("Failed to serialize settings: {}", err)))?;
        fs::write(&self.path, serialized)
            .map_err(|err| AppError::ConfigError(format!("Failed to save settings: {}", err)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::ModelProvider;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let mut settings = Settings::default();
        settings.model.provider = ModelProvider::Qwen;
        settings.model.qwen.endpoint = "http://localhost:9999".to_string();
        store.save(&settings).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let store = SettingsStore::new(path);
        assert!(matches!(store.load(), Err(AppError::ConfigError(_))));
    }
}

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::security::keyring::KeyringManager;

/// Application configuration: where the dataset lives and where the
/// collaborator services listen. Layered from defaults, an optional
/// `keeko.toml`, and `KEEKO_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Explicit dataset path; otherwise the bundled `data.csv` is used.
    pub dataset_path: Option<PathBuf>,
    pub summarizer_url: String,
    pub prompt_api_url: String,
    pub efetch_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            summarizer_url: "http://localhost:8000".to_string(),
            prompt_api_url: "http://localhost:3414".to_string(),
            efetch_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("keeko.toml"))
            .merge(Env::prefixed("KEEKO_"))
            .extract()
            .map_err(|e| AppError::ConfigError(format!("Failed to load configuration: {}", e)))
    }
}

/// Keyring-backed credential storage, one secret per provider.
pub struct ConfigService;

impl ConfigService {
    pub fn new() -> Self {
        Self
    }

    pub fn save_api_key(&self, provider: &str, key: &str) -> Result<()> {
        KeyringManager::set_secret(provider, key)
    }

    pub fn get_api_key(&self, provider: &str) -> Result<String> {
        KeyringManager::get_secret(provider)
    }

    pub fn delete_api_key(&self, provider: &str) -> Result<()> {
        KeyringManager::delete_secret(provider)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

use serde::{Deserialize, Serialize};

/// Summarization model backing the local summarizer service.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Local,
    Gemini,
    OpenAi,
    Copilot,
    Qwen,
}

impl Default for ModelProvider {
    fn default() -> Self {
        ModelProvider::Local
    }
}

impl ModelProvider {
    /// Keyring entry name for this provider's credential.
    pub fn credential_key(&self) -> &'static str {
        match self {
            ModelProvider::Local => "local",
            ModelProvider::Gemini => "gemini",
            ModelProvider::OpenAi => "openai",
            ModelProvider::Copilot => "copilot",
            ModelProvider::Qwen => "qwen",
        }
    }
}

/// Non-secret Gemini project settings. The API key lives in the keyring.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub name: String,
    pub project_name: String,
    pub project_number: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            name: "keeko".to_string(),
            project_name: String::new(),
            project_number: String::new(),
        }
    }
}

/// Non-secret Qwen settings. The API key lives in the keyring.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QwenSettings {
    pub endpoint: String,
}

impl Default for QwenSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://dashscope.aliyuncs.com/api/v1".to_string(),
        }
    }
}

/// Model selection and per-provider settings, persisted on explicit save.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ModelSettings {
    pub provider: ModelProvider,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub qwen: QwenSettings,
}

/// The whole persisted settings document (`settings.json`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Settings {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub theme: super::theme::ThemeSettings,
}

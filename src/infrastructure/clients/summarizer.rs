use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::application::use_cases::summarize::SummaryBackend;
use crate::application::use_cases::system_prompt::PromptStore;
use crate::domain::error::{AppError, Result};

#[derive(Deserialize)]
struct SummarizeResponse {
    summary: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct PromptResponse {
    prompt: Option<String>,
    error: Option<String>,
}

#[derive(Serialize)]
struct PromptUpdate<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct PromptUpdateResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

/// Client for the local summarizer service: multipart XML in, JSON summary
/// out, plus the system-prompt endpoint.
pub struct SummarizerClient {
    client: reqwest::Client,
    summarizer_url: String,
    prompt_api_url: String,
}

impl SummarizerClient {
    pub fn new(summarizer_url: &str, prompt_api_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(300))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            summarizer_url: summarizer_url.trim_end_matches('/').to_string(),
            prompt_api_url: prompt_api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SummaryBackend for SummarizerClient {
    async fn summarize_xml(&self, filename: &str, xml: Vec<u8>) -> Result<String> {
        let url = format!("{}/summarize", self.summarizer_url);
        let form = Form::new().part(
            "file",
            Part::bytes(xml)
                .file_name(filename.to_string())
                .mime_str("application/xml")
                .map_err(|e| AppError::Internal(format!("Invalid mime type: {}", e)))?,
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Summarizer request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::SummaryError(format!(
                "Summarizer error ({})",
                response.status()
            )));
        }

        let body: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| AppError::SummaryError(format!("Invalid summarizer response: {}", e)))?;

        if let Some(error) = body.error {
            return Err(AppError::SummaryError(error));
        }
        body.summary
            .ok_or_else(|| AppError::SummaryError("Summarizer returned no summary".to_string()))
    }
}

#[async_trait]
impl PromptStore for SummarizerClient {
    async fn load(&self) -> Result<String> {
        let url = format!("{}/api/system-prompt", self.prompt_api_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Prompt load failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::NetworkError(format!(
                "Prompt load failed ({})",
                response.status()
            )));
        }

        let body: PromptResponse = response
            .json()
            .await
            .map_err(|e| AppError::NetworkError(format!("Invalid prompt response: {}", e)))?;

        if let Some(error) = body.error {
            return Err(AppError::ConfigError(error));
        }
        body.prompt
            .ok_or_else(|| AppError::ConfigError("Prompt service returned no prompt".to_string()))
    }

    async fn save(&self, prompt: &str) -> Result<()> {
        let url = format!("{}/api/system-prompt", self.prompt_api_url);
        let response = self
            .client
            .post(&url)
            .json(&PromptUpdate { prompt })
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Prompt save failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::NetworkError(format!(
                "Prompt save failed ({})",
                response.status()
            )));
        }

        let body: PromptUpdateResponse = response
            .json()
            .await
            .map_err(|e| AppError::NetworkError(format!("Invalid prompt response: {}", e)))?;

        if let Some(error) = body.error {
            return Err(AppError::ConfigError(error));
        }
        if !body.success {
            return Err(AppError::ConfigError(
                body.message
                    .unwrap_or_else(|| "Prompt service rejected the update".to_string()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_response_decoding() {
        let ok: SummarizeResponse =
            serde_json::from_str(r#"{"summary": "Short text."}"#).unwrap();
        assert_eq!(ok.summary.as_deref(), Some("Short text."));
        assert!(ok.error.is_none());

        let err: SummarizeResponse =
            serde_json::from_str(r#"{"error": "model offline"}"#).unwrap();
        assert_eq!(err.error.as_deref(), Some("model offline"));
    }

    #[test]
    fn test_prompt_response_decoding() {
        let ok: PromptResponse = serde_json::from_str(r#"{"prompt": "Summarize."}"#).unwrap();
        assert_eq!(ok.prompt.as_deref(), Some("Summarize."));

        let update: PromptUpdateResponse =
            serde_json::from_str(r#"{"success": true, "message": "ok"}"#).unwrap();
        assert!(update.success);

        let failure: PromptUpdateResponse =
            serde_json::from_str(r#"{"error": "disk full"}"#).unwrap();
        assert!(!failure.success);
        assert_eq!(failure.error.as_deref(), Some("disk full"));
    }

    #[test]
    fn test_prompt_update_serialization() {
        let json = serde_json::to_string(&PromptUpdate { prompt: "hi" }).unwrap();
        assert_eq!(json, r#"{"prompt":"hi"}"#);
    }
}

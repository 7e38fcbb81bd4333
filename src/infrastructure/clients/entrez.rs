use async_trait::async_trait;

use crate::application::use_cases::summarize::ArticleSource;
use crate::domain::error::{AppError, Result};

/// NCBI efetch client: downloads full-text article XML by PMC id.
pub struct EntrezClient {
    client: reqwest::Client,
    efetch_url: String,
}

impl EntrezClient {
    pub fn new(efetch_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            efetch_url: efetch_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ArticleSource for EntrezClient {
    async fn fetch_xml(&self, pmc_id: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.efetch_url)
            .query(&[("db", "pmc"), ("id", pmc_id), ("retmode", "xml")])
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Article download failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::NetworkError(format!(
                "Article download failed ({})",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::NetworkError(format!("Article download failed: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

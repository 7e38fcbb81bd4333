// ============================================================
// SUMMARIZE USE CASE
// ============================================================
// Turn a result's Link into an AI summary: extract the PMC id, download the
// article XML, and hand it to the local summarizer service.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::info;

use crate::domain::error::{AppError, Result};

static PMC_ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"PMC(\d{6,7})").unwrap());

/// Where article XML comes from (the NCBI efetch endpoint in production).
#[async_trait]
pub trait ArticleSource {
    async fn fetch_xml(&self, pmc_id: &str) -> Result<Vec<u8>>;
}

/// The local summarization collaborator.
#[async_trait]
pub trait SummaryBackend {
    async fn summarize_xml(&self, filename: &str, xml: Vec<u8>) -> Result<String>;
}

/// Pull a PMC identifier (the digits) out of an article link.
pub fn extract_pmc_id(link: &str) -> Option<String> {
    PMC_ID_PATTERN
        .captures(link)
        .map(|captures| captures[1].to_string())
}

pub struct SummarizeUseCase {
    articles: Arc<dyn ArticleSource + Send + Sync>,
    backend: Arc<dyn SummaryBackend + Send + Sync>,
}

impl SummarizeUseCase {
    pub fn new(
        articles: Arc<dyn ArticleSource + Send + Sync>,
        backend: Arc<dyn SummaryBackend + Send + Sync>,
    ) -> Self {
        Self { articles, backend }
    }

    /// Summarize the paper behind `link`. Fails with a user-facing message
    /// when the link carries no PMC id or either collaborator errors.
    pub async fn execute(&self, link: &str) -> Result<String> {
        let pmc_id = extract_pmc_id(link).ok_or_else(|| {
            AppError::SummaryError(format!("No PMC id found in link: {}", link))
        })?;

        info!(pmc_id = %pmc_id, "Fetching article XML");
        let xml = self.articles.fetch_xml(&pmc_id).await?;

        info!(pmc_id = %pmc_id, bytes = xml.len(), "Requesting summary");
        self.backend.summarize_xml("paper.xml", xml).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_extract_pmc_id() {
        assert_eq!(
            extract_pmc_id("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC4136787/"),
            Some("4136787".to_string())
        );
        assert_eq!(extract_pmc_id("https://example.com/other"), None);
        // Too few digits.
        assert_eq!(extract_pmc_id("PMC12345"), None);
    }

    struct StubArticles {
        xml: Vec<u8>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ArticleSource for StubArticles {
        async fn fetch_xml(&self, pmc_id: &str) -> Result<Vec<u8>> {
            self.requested.lock().unwrap().push(pmc_id.to_string());
            Ok(self.xml.clone())
        }
    }

    struct StubBackend {
        reply: Result<String>,
    }

    #[async_trait]
    impl SummaryBackend for StubBackend {
        async fn summarize_xml(&self, filename: &str, _xml: Vec<u8>) -> Result<String> {
            assert_eq!(filename, "paper.xml");
            match &self.reply {
                Ok(summary) => Ok(summary.clone()),
                Err(AppError::SummaryError(msg)) => Err(AppError::SummaryError(msg.clone())),
                Err(_) => Err(AppError::Internal("unexpected".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_execute_happy_path() {
        let articles = Arc::new(StubArticles {
            xml: b"<article/>".to_vec(),
            requested: Mutex::new(Vec::new()),
        });
        let use_case = SummarizeUseCase::new(
            articles.clone(),
            Arc::new(StubBackend {
                reply: Ok("A short summary.".to_string()),
            }),
        );

        let summary = use_case
            .execute("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC4136787/")
            .await
            .unwrap();

        assert_eq!(summary, "A short summary.");
        assert_eq!(*articles.requested.lock().unwrap(), vec!["4136787"]);
    }

    #[tokio::test]
    async fn test_execute_rejects_link_without_pmc_id() {
        let use_case = SummarizeUseCase::new(
            Arc::new(StubArticles {
                xml: Vec::new(),
                requested: Mutex::new(Vec::new()),
            }),
            Arc::new(StubBackend {
                reply: Ok(String::new()),
            }),
        );

        let err = use_case.execute("https://example.com/paper").await;
        assert!(matches!(err, Err(AppError::SummaryError(_))));
    }

    #[tokio::test]
    async fn test_execute_propagates_backend_error() {
        let use_case = SummarizeUseCase::new(
            Arc::new(StubArticles {
                xml: b"<article/>".to_vec(),
                requested: Mutex::new(Vec::new()),
            }),
            Arc::new(StubBackend {
                reply: Err(AppError::SummaryError("model offline".to_string())),
            }),
        );

        let err = use_case.execute("PMC123456").await;
        assert!(matches!(err, Err(AppError::SummaryError(msg)) if msg == "model offline"));
    }
}

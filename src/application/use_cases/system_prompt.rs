// ============================================================
// SYSTEM PROMPT USE CASE
// ============================================================
// Load and save the summarizer's system prompt, keeping the word-count goal
// sentence at the end of the document.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::error::Result;

static WORD_COUNT_GOAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)word count goal is (\d+)").unwrap());
static WORD_COUNT_GOAL_STRIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)word count goal is \d+\.?\s*").unwrap());

/// The prompt-configuration collaborator (GET/POST of one text value).
#[async_trait]
pub trait PromptStore {
    async fn load(&self) -> Result<String>;
    async fn save(&self, prompt: &str) -> Result<()>;
}

/// Prompt text plus the goal parsed out of it, as edited in the UI.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    pub prompt: String,
    pub word_count_goal: Option<u32>,
}

/// Read the trailing word-count goal out of a prompt, if present.
pub fn extract_word_count_goal(prompt: &str) -> Option<u32> {
    WORD_COUNT_GOAL_PATTERN
        .captures(prompt)
        .and_then(|captures| captures[1].parse().ok())
}

/// Replace any existing word-count goal with `goal`, appended as the final
/// sentence of the trimmed prompt.
pub fn apply_word_count_goal(prompt: &str, goal: u32) -> String {
    let stripped = WORD_COUNT_GOAL_STRIP_PATTERN.replace_all(prompt, "");
    format!("{} word count goal is {}.", stripped.trim(), goal)
}

pub struct SystemPromptUseCase {
    store: Arc<dyn PromptStore + Send + Sync>,
}

impl SystemPromptUseCase {
    pub fn new(store: Arc<dyn PromptStore + Send + Sync>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<PromptDocument> {
        let prompt = self.store.load().await?;
        let word_count_goal = extract_word_count_goal(&prompt);
        Ok(PromptDocument {
            prompt,
            word_count_goal,
        })
    }

    /// Persist the edited prompt. When a goal is given the stored text ends
    /// with exactly one `word count goal is N.` sentence.
    pub async fn save(&self, prompt: &str, word_count_goal: Option<u32>) -> Result<()> {
        let text = match word_count_goal {
            Some(goal) => apply_word_count_goal(prompt, goal),
            None => prompt.to_string(),
        };
        self.store.save(&text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_extract_goal() {
        assert_eq!(
            extract_word_count_goal("Summarize tersely. word count goal is 250."),
            Some(250)
        );
        assert_eq!(
            extract_word_count_goal("Word Count Goal is 100"),
            Some(100)
        );
        assert_eq!(extract_word_count_goal("Summarize tersely."), None);
    }

    #[test]
    fn test_apply_goal_appends_sentence() {
        assert_eq!(
            apply_word_count_goal("Summarize tersely.", 250),
            "Summarize tersely. word count goal is 250."
        );
    }

    #[test]
    fn test_apply_goal_replaces_existing_goal() {
        let prompt = "Summarize tersely. word count goal is 250. Be precise.";
        let updated = apply_word_count_goal(prompt, 100);

        assert_eq!(
            updated,
            "Summarize tersely. Be precise. word count goal is 100."
        );
        assert_eq!(extract_word_count_goal(&updated), Some(100));
    }

    #[test]
    fn test_apply_then_extract_roundtrip() {
        let updated = apply_word_count_goal("Explain for a general audience.", 400);
        assert_eq!(extract_word_count_goal(&updated), Some(400));
        // Applying again never stacks goals.
        let again = apply_word_count_goal(&updated, 150);
        assert_eq!(again.matches("word count goal").count(), 1);
    }

    struct StubStore {
        saved: Mutex<Option<String>>,
        stored: String,
    }

    #[async_trait]
    impl PromptStore for StubStore {
        async fn load(&self) -> Result<String> {
            Ok(self.stored.clone())
        }

        async fn save(&self, prompt: &str) -> Result<()> {
            *self.saved.lock().unwrap() = Some(prompt.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_parses_goal() {
        let use_case = SystemPromptUseCase::new(Arc::new(StubStore {
            saved: Mutex::new(None),
            stored: "Summarize. word count goal is 250.".to_string(),
        }));

        let doc = use_case.load().await.unwrap();
        assert_eq!(doc.word_count_goal, Some(250));
    }

    #[tokio::test]
    async fn test_save_rewrites_goal() {
        let store = Arc::new(StubStore {
            saved: Mutex::new(None),
            stored: String::new(),
        });
        let use_case = SystemPromptUseCase::new(store.clone());

        use_case
            .save("Summarize. word count goal is 250.", Some(99))
            .await
            .unwrap();

        let saved = store.saved.lock().unwrap().clone().unwrap();
        assert_eq!(saved, "Summarize. word count goal is 99.");
    }
}

use serde::{Deserialize, Serialize};

/// Result ordering applied after the filter/match step.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Preserve the order produced by the filter/match step.
    None,
    /// Title ascending, case-insensitive.
    Asc,
    /// Title descending, case-insensitive.
    Desc,
    /// Ascending by fuzzy score; unscored (exact) hits rank first.
    Relevance,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::None
    }
}

/// One search request as configured in the UI.
///
/// Setting either `case_sensitive` or `whole_words` switches the engine from
/// fuzzy matching to exact regex matching.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub whole_words: bool,
    #[serde(default)]
    pub sort: SortOrder,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            case_sensitive: false,
            whole_words: false,
            sort: SortOrder::None,
        }
    }

    /// Exact mode is requested whenever either filter flag is set.
    pub fn is_exact(&self) -> bool {
        self.case_sensitive || self.whole_words
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("")
    }
}

// ============================================================
// PAPER RECORD TYPES
// ============================================================
// Data structures representing parsed dataset content

use serde::{Deserialize, Serialize};

/// One parsed CSV record: an ordered mapping from header name to value.
///
/// Field order follows the header line. Missing trailing fields are stored
/// as empty strings so every record carries the full header set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRecord {
    /// (header, value) pairs in header order
    pub fields: Vec<(String, String)>,
}

impl PaperRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Look up a field value by header name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `Title` field, or an empty string when the column is absent.
    pub fn title(&self) -> &str {
        self.get("Title").unwrap_or("")
    }

    /// The optional `Link` field.
    pub fn link(&self) -> Option<&str> {
        self.get("Link").filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A record that survived the search filter, with an optional fuzzy score.
///
/// The score is present only for fuzzy matches; lower means a closer match.
/// Exact-mode hits carry no score and rank as maximally relevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub record: PaperRecord,
    pub score: Option<f64>,
}

impl RankedResult {
    pub fn unscored(record: PaperRecord) -> Self {
        Self {
            record,
            score: None,
        }
    }

    pub fn scored(record: PaperRecord, score: f64) -> Self {
        Self {
            record,
            score: Some(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> PaperRecord {
        PaperRecord::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_title_and_link_accessors() {
        let row = record(&[("Title", "Microgravity and bone loss"), ("Link", "https://x")]);
        assert_eq!(row.title(), "Microgravity and bone loss");
        assert_eq!(row.link(), Some("https://x"));
    }

    #[test]
    fn test_missing_title_is_empty() {
        let row = record(&[("Author", "someone")]);
        assert_eq!(row.title(), "");
        assert_eq!(row.link(), None);
    }

    #[test]
    fn test_empty_link_is_none() {
        let row = record(&[("Title", "t"), ("Link", "")]);
        assert_eq!(row.link(), None);
    }
}

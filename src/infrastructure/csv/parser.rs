// ============================================================
// CSV PARSER
// ============================================================
// Best-effort parser for the dataset CSV: header line plus comma-separated
// rows with optional double-quoted fields

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::record::PaperRecord;

// A token is either a double-quoted span (which may contain commas) or a
// maximal run of characters excluding comma, quote, and newline. Embedded
// escaped quotes are not supported; malformed quoting yields undefined but
// non-crashing token boundaries.
static CSV_TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"\n]*"|[^",\n]+"#).unwrap());

/// Parsed dataset: the header set plus one record per data line.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub records: Vec<PaperRecord>,
}

/// Best-effort CSV parser. Malformed rows never fail the parse.
pub struct CsvParser;

impl CsvParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a dataset file. Non-UTF8 bytes are decoded lossily.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedCsv> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read dataset {}: {}", path.display(), e))
        })?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.parse_text(&content))
    }

    /// Parse CSV text. The first line is the header; every subsequent line
    /// becomes one record with the full header set, short lines padded with
    /// empty strings. Empty input yields an empty header set and no records.
    pub fn parse_text(&self, text: &str) -> ParsedCsv {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ParsedCsv::default();
        }

        let mut lines = trimmed.lines();
        let headers: Vec<String> = match lines.next() {
            Some(header_line) => header_line
                .split(',')
                .map(|name| name.trim().to_string())
                .collect(),
            None => return ParsedCsv::default(),
        };

        let records = lines
            .map(|line| {
                let values: Vec<&str> = CSV_TOKEN_PATTERN
                    .find_iter(line)
                    .map(|token| strip_quotes(token.as_str()))
                    .collect();

                let fields = headers
                    .iter()
                    .enumerate()
                    .map(|(idx, header)| {
                        let value = values.get(idx).map(|v| v.trim()).unwrap_or("");
                        (header.clone(), value.to_string())
                    })
                    .collect();
                PaperRecord::new(fields)
            })
            .collect();

        ParsedCsv { headers, records }
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_quotes(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "Title,Link\nBone loss in mice,https://a\nPlant growth,https://b";
        let parsed = CsvParser::new().parse_text(content);

        assert_eq!(parsed.headers, vec!["Title", "Link"]);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].title(), "Bone loss in mice");
        assert_eq!(parsed.records[1].link(), Some("https://b"));
    }

    #[test]
    fn test_every_record_carries_the_full_header_set() {
        let content = "A,B,C\n1,2,3\nx";
        let parsed = CsvParser::new().parse_text(content);

        assert_eq!(parsed.records.len(), 2);
        for record in &parsed.records {
            assert_eq!(record.len(), 3);
        }
        assert_eq!(parsed.records[1].get("A"), Some("x"));
        assert_eq!(parsed.records[1].get("B"), Some(""));
        assert_eq!(parsed.records[1].get("C"), Some(""));
    }

    #[test]
    fn test_quoted_comma_is_not_a_separator() {
        let parsed = CsvParser::new().parse_text("Title\n\"Hello, World\"");

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].title(), "Hello, World");
    }

    #[test]
    fn test_values_and_headers_are_trimmed() {
        let parsed = CsvParser::new().parse_text(" Title , Link \n  spaced out  ,https://x");

        assert_eq!(parsed.headers, vec!["Title", "Link"]);
        assert_eq!(parsed.records[0].title(), "spaced out");
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let parsed = CsvParser::new().parse_text("");
        assert!(parsed.headers.is_empty());
        assert!(parsed.records.is_empty());

        let parsed = CsvParser::new().parse_text("   \n  ");
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_header_only_input_yields_no_records() {
        let parsed = CsvParser::new().parse_text("Title,Link");
        assert_eq!(parsed.headers.len(), 2);
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_malformed_quoting_does_not_panic() {
        // Unterminated quote: token boundaries are undefined but parsing
        // must complete with the full header set per record.
        let parsed = CsvParser::new().parse_text("Title,Link\n\"broken,https://x");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].len(), 2);
    }
}

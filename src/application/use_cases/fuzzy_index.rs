// ============================================================
// FUZZY TITLE INDEX
// ============================================================
// Approximate matching over record titles. The index is a pure function of
// the record set: it is rebuilt when the records change and reused across
// queries.

use strsim::normalized_levenshtein;

use crate::domain::record::PaperRecord;

/// Matches at or below this distance survive. Distances live on a 0-1 scale
/// where 0 is an exact match.
pub const FUZZY_THRESHOLD: f64 = 0.4;

#[derive(Debug)]
struct IndexedTitle {
    row: usize,
    folded: String,
    words: Vec<String>,
}

/// A fuzzy match: the source row plus its distance score (lower = closer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    pub row: usize,
    pub score: f64,
}

/// Case-folded title index for approximate search.
#[derive(Debug)]
pub struct FuzzyIndex {
    titles: Vec<IndexedTitle>,
}

impl FuzzyIndex {
    /// Build the index over the `Title` field of every record.
    pub fn build(records: &[PaperRecord]) -> Self {
        let titles = records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let folded = record.title().to_lowercase();
                let words = folded.split_whitespace().map(str::to_string).collect();
                IndexedTitle { row, folded, words }
            })
            .collect();
        Self { titles }
    }

    /// All titles within [`FUZZY_THRESHOLD`] of the query, ordered ascending
    /// by (score, row). The ordering is fully deterministic for a fixed
    /// index and query.
    pub fn search(&self, query: &str) -> Vec<FuzzyMatch> {
        let folded_query = query.to_lowercase();
        let query_words = folded_query.split_whitespace().count().max(1);

        let mut matches: Vec<FuzzyMatch> = self
            .titles
            .iter()
            .filter_map(|title| {
                let score = title_distance(&folded_query, title, query_words);
                (score <= FUZZY_THRESHOLD).then_some(FuzzyMatch {
                    row: title.row,
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.row.cmp(&b.row))
        });
        matches
    }
}

// Distance between the query and one title: 1 minus the best normalized
// similarity over the whole title and over word windows sized to the query.
// Word windows let a short query land inside a long title the way a
// subsequence matcher would.
fn title_distance(query: &str, title: &IndexedTitle, query_words: usize) -> f64 {
    if title.folded.is_empty() {
        return 1.0;
    }

    let mut best = normalized_levenshtein(query, &title.folded);

    for window_len in [query_words, query_words + 1] {
        if window_len > title.words.len() {
            continue;
        }
        for window in title.words.windows(window_len) {
            let candidate = window.join(" ");
            let similarity = normalized_levenshtein(query, &candidate);
            if similarity > best {
                best = similarity;
            }
        }
    }

    1.0 - best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(titles: &[&str]) -> Vec<PaperRecord> {
        titles
            .iter()
            .map(|t| PaperRecord::new(vec![("Title".to_string(), t.to_string())]))
            .collect()
    }

    #[test]
    fn test_exact_title_scores_zero() {
        let index = FuzzyIndex::build(&records(&["microgravity", "radiation"]));
        let matches = index.search("microgravity");

        assert_eq!(matches[0].row, 0);
        assert!(matches[0].score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_typo_within_threshold() {
        let index = FuzzyIndex::build(&records(&["microgravity effects on mice"]));
        let matches = index.search("microgravty");

        assert_eq!(matches.len(), 1);
        assert!(matches[0].score > 0.0);
        assert!(matches[0].score <= FUZZY_THRESHOLD);
    }

    #[test]
    fn test_unrelated_title_is_excluded() {
        let index = FuzzyIndex::build(&records(&["completely different subject"]));
        assert!(index.search("microgravity").is_empty());
    }

    #[test]
    fn test_short_query_matches_inside_long_title() {
        let index = FuzzyIndex::build(&records(&[
            "effects of spaceflight on the immune system",
        ]));
        let matches = index.search("immune");

        assert_eq!(matches.len(), 1);
        assert!(matches[0].score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_matches_are_ordered_by_score_then_row() {
        let index = FuzzyIndex::build(&records(&["immune cells", "immune", "immunity"]));
        let matches = index.search("immune");

        assert_eq!(matches.first().map(|m| m.row), Some(0));
        let scores: Vec<f64> = matches.iter().map(|m| m.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(scores, sorted);
    }

    #[test]
    fn test_search_is_deterministic() {
        let index = FuzzyIndex::build(&records(&["alpha beta", "beta gamma", "gamma delta"]));
        assert_eq!(index.search("beta"), index.search("beta"));
    }
}

// ============================================================
// SEARCH & RANKING ENGINE
// ============================================================
// Filters the record set by title and orders the survivors. Exact mode
// (either filter flag set) builds a regex from the escaped query; fuzzy mode
// delegates to the prebuilt title index.

use regex::RegexBuilder;

use crate::domain::query::{SearchQuery, SortOrder};
use crate::domain::record::{PaperRecord, RankedResult};

use super::fuzzy_index::FuzzyIndex;

/// Run one search over the record set.
///
/// An empty query always yields an empty result: there is no browse-all mode.
/// For a fixed record set, index, and query the output is identical across
/// calls.
pub fn search(records: &[PaperRecord], index: &FuzzyIndex, query: &SearchQuery) -> Vec<RankedResult> {
    if query.text.is_empty() {
        return Vec::new();
    }

    let mut results = if query.is_exact() {
        exact_matches(records, query)
    } else {
        fuzzy_matches(records, index, query)
    };

    sort_results(&mut results, query.sort);
    results
}

// Exact mode: escape every regex metacharacter in the query, anchor with word
// boundaries when whole-word matching is on, and match case-insensitively
// unless case sensitivity is requested. Survivors carry no score. A pattern
// that fails to build degrades to an empty result rather than an error.
fn exact_matches(records: &[PaperRecord], query: &SearchQuery) -> Vec<RankedResult> {
    let mut pattern = regex::escape(&query.text);
    if query.whole_words {
        pattern = format!(r"\b{}\b", pattern);
    }

    let regex = match RegexBuilder::new(&pattern)
        .case_insensitive(!query.case_sensitive)
        .build()
    {
        Ok(regex) => regex,
        Err(_) => return Vec::new(),
    };

    records
        .iter()
        .filter(|record| regex.is_match(record.title()))
        .map(|record| RankedResult::unscored(record.clone()))
        .collect()
}

// Fuzzy mode: the index yields (row, score) pairs already ordered ascending
// by score with row-order tie-breaks.
fn fuzzy_matches(
    records: &[PaperRecord],
    index: &FuzzyIndex,
    query: &SearchQuery,
) -> Vec<RankedResult> {
    index
        .search(&query.text)
        .into_iter()
        .filter_map(|m| {
            records
                .get(m.row)
                .map(|record| RankedResult::scored(record.clone(), m.score))
        })
        .collect()
}

fn sort_results(results: &mut [RankedResult], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::Relevance => {
            // Unscored (exact) hits are all equally top-ranked; the sort is
            // stable so ties keep their match order.
            results.sort_by(|a, b| {
                let a_score = a.score.unwrap_or(0.0);
                let b_score = b.score.unwrap_or(0.0);
                a_score
                    .partial_cmp(&b_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortOrder::Asc => {
            results.sort_by_key(|r| r.record.title().to_lowercase());
        }
        SortOrder::Desc => {
            results.sort_by_key(|r| std::cmp::Reverse(r.record.title().to_lowercase()));
        }
    }
}

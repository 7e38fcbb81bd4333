// ============================================================
// CATALOG SERVICE
// ============================================================
// Owns the loaded dataset and the fuzzy index derived from it, and answers
// search requests one page at a time.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, RwLock};

use crate::domain::error::Result;
use crate::domain::query::SearchQuery;
use crate::domain::record::{PaperRecord, RankedResult};
use crate::infrastructure::csv::{CsvParser, ParsedCsv};

use super::fuzzy_index::FuzzyIndex;
use super::paginate::{paginate, total_pages, PAGE_SIZE};
use super::search::search;

/// One loaded dataset. The fuzzy index is a derived value: built lazily on
/// first fuzzy search and valid for exactly this record set.
pub struct Catalog {
    headers: Vec<String>,
    records: Vec<PaperRecord>,
    fuzzy: OnceCell<FuzzyIndex>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::from_parsed(ParsedCsv::default())
    }

    pub fn from_parsed(parsed: ParsedCsv) -> Self {
        Self {
            headers: parsed.headers,
            records: parsed.records,
            fuzzy: OnceCell::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    fn fuzzy_index(&self) -> &FuzzyIndex {
        self.fuzzy.get_or_init(|| FuzzyIndex::build(&self.records))
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<RankedResult> {
        search(&self.records, self.fuzzy_index(), query)
    }
}

/// Summary of a loaded dataset, for the UI.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogInfo {
    pub rows: usize,
    pub headers: Vec<String>,
}

/// One page of search results.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchPage {
    pub items: Vec<RankedResult>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Shared catalog state behind the command boundary.
///
/// Remembers the last query so that any query-configuration change resets
/// the active page to 1.
pub struct CatalogService {
    parser: CsvParser,
    catalog: RwLock<Catalog>,
    last_query: Mutex<Option<SearchQuery>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            parser: CsvParser::new(),
            catalog: RwLock::new(Catalog::empty()),
            last_query: Mutex::new(None),
        }
    }

    /// Replace the catalog with the contents of a dataset file.
    pub fn load_file(&self, path: &Path) -> Result<CatalogInfo> {
        let parsed = self.parser.parse_file(path)?;
        Ok(self.install(parsed))
    }

    /// Replace the catalog with parsed CSV text.
    pub fn load_text(&self, text: &str) -> CatalogInfo {
        let parsed = self.parser.parse_text(text);
        self.install(parsed)
    }

    fn install(&self, parsed: ParsedCsv) -> CatalogInfo {
        let catalog = Catalog::from_parsed(parsed);
        let info = CatalogInfo {
            rows: catalog.records().len(),
            headers: catalog.headers().to_vec(),
        };
        *self.catalog.write().unwrap() = catalog;
        *self.last_query.lock().unwrap() = None;
        info
    }

    pub fn info(&self) -> CatalogInfo {
        let catalog = self.catalog.read().unwrap();
        CatalogInfo {
            rows: catalog.records().len(),
            headers: catalog.headers().to_vec(),
        }
    }

    /// Run a search and slice out the requested page. A query different from
    /// the previous one forces page 1 regardless of the requested page.
    pub fn search_page(&self, query: &SearchQuery, requested_page: usize) -> SearchPage {
        let page = {
            let mut last = self.last_query.lock().unwrap();
            let changed = last.as_ref() != Some(query);
            *last = Some(query.clone());
            if changed {
                1
            } else {
                requested_page.max(1)
            }
        };

        let catalog = self.catalog.read().unwrap();
        let results = catalog.search(query);
        let items = paginate(&results, page, PAGE_SIZE).to_vec();

        SearchPage {
            items,
            page,
            total_pages: total_pages(results.len(), PAGE_SIZE),
            total_matches: results.len(),
        }
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

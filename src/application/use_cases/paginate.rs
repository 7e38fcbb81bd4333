// ============================================================
// PAGINATION SLICER
// ============================================================

use crate::domain::record::RankedResult;

/// Results shown per page.
pub const PAGE_SIZE: usize = 32;

/// Slice out one 1-based page, clipped to the available results.
/// Out-of-range pages (including page 0) yield an empty slice.
pub fn paginate(results: &[RankedResult], page: usize, page_size: usize) -> &[RankedResult] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= results.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(results.len());
    &results[start..end]
}

/// Number of pages needed for `len` results; 0 when there are none.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

//! Page slicing over ranked record sequences.

use faqdex_types::{Page, Record};

/// Cuts the requested 1-based page out of `records`.
///
/// `total_pages` is at least 1 even for an empty sequence, so callers
/// can always render a pager. A requested page of 0 or past the end
/// falls back to page 1 rather than failing; a `page_size` of 0 is
/// treated as 1.
#[must_use]
pub fn paginate<'a>(records: &[&'a Record], page_size: usize, requested: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_pages = records.len().div_ceil(page_size).max(1);
    let page_number = if requested == 0 || requested > total_pages {
        1
    } else {
        requested
    };

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(records.len());

    Page {
        items: records[start..end].to_vec(),
        page_number,
        total_pages,
    }
}

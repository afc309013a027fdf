//! Category faceting over record sets.

use faqdex_types::{CategoryFilter, Record};

/// Distinct category labels across `records`, sorted ascending.
///
/// Ordering is plain code-point order, which keeps the label list
/// stable across rebuilds without locale tables.
#[must_use]
pub fn categories(records: &[Record]) -> Vec<String> {
    let mut names: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.into_iter().map(str::to_string).collect()
}

/// Records passing `filter`, in their original order.
#[must_use]
pub fn filter<'a>(records: &'a [Record], filter: &CategoryFilter) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| filter.matches(&r.category))
        .collect()
}

//! Detail-first ordering for default browsing.
//!
//! When no query is active, the landing view surfaces the entries with
//! the richest answers instead of raw source order. Completeness is
//! the character count of a record's keywords plus its step-by-step
//! answer; see [`Record::completeness`].

use core::cmp::Reverse;

use faqdex_types::Record;

/// Orders `records` most detailed first.
///
/// The sort is stable, so equally detailed records keep their incoming
/// order. Callers wanting a short list truncate afterwards, typically
/// to [`TOP_PICKS_LIMIT`](crate::base::TOP_PICKS_LIMIT).
#[must_use]
pub fn by_completeness<'a>(records: &[&'a Record]) -> Vec<&'a Record> {
    let mut picks = records.to_vec();
    picks.sort_by_cached_key(|record| Reverse(record.completeness()));
    picks
}

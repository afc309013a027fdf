//! Knowledge-base types and constants.

use faqdex_types::{CategoryFilter, Record};

use crate::base::facet;
use crate::ingest;

pub const DEFAULT_PAGE_SIZE: usize = 20;

pub const TOP_PICKS_LIMIT: usize = 15;

/// Rolling window, in days, within which an update counts as recent.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// An immutable, in-memory FAQ knowledge base.
///
/// Built once from CSV text; every later operation reads the same
/// record set. Refreshing the data means ingesting again and swapping
/// the value, so readers never observe a half-updated base.
pub struct KnowledgeBase {
    pub(crate) records: Vec<Record>,
    pub(crate) categories: Vec<String>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Builds a knowledge base from CSV text.
    ///
    /// The first row is the header; records come back ordered newest
    /// first. Ingest never fails: rows that cannot become records are
    /// dropped along the way.
    #[must_use]
    pub fn ingest(text: &str) -> Self {
        let records = ingest::normalize::records(ingest::csv::parse(text));
        let categories = facet::categories(&records);
        Self {
            records,
            categories,
        }
    }

    /// Returns the number of records in the base.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the base contains no records.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, newest first.
    #[inline(always)]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the record at `index` in newest-first order.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Distinct category labels, sorted ascending.
    #[inline(always)]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Records passing `filter`, still newest first.
    #[must_use]
    pub fn select(&self, filter: &CategoryFilter) -> Vec<&Record> {
        facet::filter(&self.records, filter)
    }
}

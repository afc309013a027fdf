//! Statistics and BaseStats.

use faqdex_types::DateKey;

use crate::base::types::KnowledgeBase;

/// A snapshot of knowledge-base statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    /// Number of records in the base.
    pub num_records: usize,
    /// Number of distinct categories.
    pub num_categories: usize,
    /// Number of records carrying a usable date.
    pub num_dated: usize,
    /// Newest date key across the base, if any record is dated.
    pub latest_update: Option<DateKey>,
}

impl KnowledgeBase {
    /// Returns knowledge-base statistics.
    pub fn stats(&self) -> BaseStats {
        let num_dated = self
            .records
            .iter()
            .filter(|r| r.updated_key.is_dated())
            .count();
        let latest_update = self
            .records
            .iter()
            .map(|r| r.updated_key)
            .filter(|key| key.is_dated())
            .max();

        BaseStats {
            num_records: self.records.len(),
            num_categories: self.categories.len(),
            num_dated,
            latest_update,
        }
    }
}

impl BaseStats {
    /// Newest update formatted as `YYYY-MM`, for compact display.
    #[must_use]
    pub fn latest_month(&self) -> Option<String> {
        self.latest_update
            .map(|key| format!("{:04}-{:02}", key.year(), key.month()))
    }
}

impl core::fmt::Display for BaseStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} records, {} categories, {} dated",
            self.num_records, self.num_categories, self.num_dated
        )?;

        if let Some(month) = self.latest_month() {
            write!(f, ", latest {}", month)?;
        }

        Ok(())
    }
}

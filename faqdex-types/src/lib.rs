//! Core types for the Faqdex knowledge base.
//!
//! This crate provides the fundamental types that are shared across
//! the Faqdex ecosystem. Keeping types separate ensures:
//!
//! - **Cheap ordering**: Dates pack into a single comparable integer
//! - **Cross-crate compatibility**: Core and demo share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

/// Category assigned to records whose source row left the column blank.
pub const OTHER_CATEGORY: &str = "Other";

/// A calendar date packed as a `YYYYMMDD` decimal integer.
///
/// Keys are packed as: `year * 10_000 + month * 100 + day`
/// This representation:
/// - Sorts chronologically under plain integer comparison
/// - Fits in 4 bytes alongside each record
/// - Never needs unpacking for ordering or equality
///
/// [`DateKey::ZERO`] marks records without a usable date. It sorts
/// below every dated key, so newest-first orderings push undated
/// records to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DateKey(pub u32);

const fn clamp(value: u32, min: u32, max: u32) -> u32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl DateKey {
    /// Key for records with no usable date.
    pub const ZERO: DateKey = DateKey(0);

    /// Largest year the packed form can hold without widening.
    pub const MAX_YEAR: u32 = 9999;

    /// Creates a key from calendar components.
    ///
    /// Month is clamped into `1..=12` and day into `1..=31`. A zero
    /// year, or a year past [`DateKey::MAX_YEAR`], yields
    /// [`DateKey::ZERO`].
    #[inline(always)]
    pub const fn from_ymd(year: u32, month: u32, day: u32) -> Self {
        if year == 0 || year > Self::MAX_YEAR {
            return Self::ZERO;
        }
        Self(year * 10_000 + clamp(month, 1, 12) * 100 + clamp(day, 1, 31))
    }

    /// Parses a key out of loosely formatted date text.
    ///
    /// Accepts `-`, `/`, and `.` separators in any mix, with optional
    /// month and day: `2026-02-13`, `2026.02.13`, `2026/2/3`,
    /// `2026-02`, and bare `2026` all parse. Missing month or day
    /// default to 1, and out-of-range components clamp into
    /// `1..=12` / `1..=31`, so a sloppy source date still lands near
    /// the right spot in newest-first order.
    ///
    /// Returns [`DateKey::ZERO`] when the text is blank, when the
    /// year is missing, zero, or not a number, or when a month/day
    /// component is present but not numeric.
    pub fn from_text(text: &str) -> Self {
        let raw = text.trim();
        if raw.is_empty() {
            return Self::ZERO;
        }

        let mut parts = raw
            .split(['-', '/', '.'])
            .map(str::trim)
            .filter(|part| !part.is_empty());

        let year = match parts.next().and_then(|part| part.parse::<u32>().ok()) {
            Some(year) if year > 0 => year,
            _ => return Self::ZERO,
        };
        let month = match parts.next() {
            Some(part) => match part.parse().ok() {
                Some(month) => month,
                None => return Self::ZERO,
            },
            None => 1,
        };
        let day = match parts.next() {
            Some(part) => match part.parse().ok() {
                Some(day) => day,
                None => return Self::ZERO,
            },
            None => 1,
        };

        Self::from_ymd(year, month, day)
    }

    /// Returns the `(year, month, day)` components.
    #[inline(always)]
    pub const fn to_ymd(self) -> (u32, u32, u32) {
        (self.0 / 10_000, self.0 / 100 % 100, self.0 % 100)
    }

    /// Returns the year component.
    #[inline(always)]
    pub const fn year(self) -> u32 {
        self.0 / 10_000
    }

    /// Returns the month component.
    #[inline(always)]
    pub const fn month(self) -> u32 {
        self.0 / 100 % 100
    }

    /// Returns the day component.
    #[inline(always)]
    pub const fn day(self) -> u32 {
        self.0 % 100
    }

    /// True for every key except [`DateKey::ZERO`].
    #[inline(always)]
    pub const fn is_dated(self) -> bool {
        self.0 != 0
    }

    /// Returns the underlying u32 value.
    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// A single question/answer entry in the knowledge base.
///
/// Fields mirror the ingest columns one-to-one and keep their text
/// untouched apart from whitespace trimming. `updated_key` is derived
/// from `last_updated` once at ingest, so ordering never re-parses
/// date text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The question text. Never empty; rows without one are dropped.
    pub question: String,
    /// Free-form search keywords.
    pub keywords: String,
    /// Category label; defaults to [`OTHER_CATEGORY`] when blank.
    pub category: String,
    /// One-line answer.
    pub answer_short: String,
    /// Step-by-step answer, newline separated.
    pub answer_steps: String,
    /// The raw date text exactly as ingested.
    pub last_updated: String,
    /// Provenance note for the answer.
    pub source_note: String,
    /// Sortable key derived from `last_updated`.
    pub updated_key: DateKey,
}

impl Record {
    /// Creates a minimal record carrying only a question.
    ///
    /// Every other text field starts empty, the category defaults to
    /// [`OTHER_CATEGORY`] and the key to [`DateKey::ZERO`]. Ingest
    /// builds real records; this is for fixtures and hand-rolled data.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            keywords: String::new(),
            category: OTHER_CATEGORY.to_string(),
            answer_short: String::new(),
            answer_steps: String::new(),
            last_updated: String::new(),
            source_note: String::new(),
            updated_key: DateKey::ZERO,
        }
    }

    /// Amount of answer detail this record carries, measured in
    /// characters of `keywords` plus `answer_steps`.
    ///
    /// Drives the completeness ranking: entries with richer keywords
    /// and longer step lists surface first.
    #[inline(always)]
    pub fn completeness(&self) -> usize {
        self.keywords.chars().count() + self.answer_steps.chars().count()
    }
}

/// Selects which categories a browse operation keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Keep every record regardless of category.
    All,
    /// Keep only records whose category equals the label exactly.
    Name(String),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    /// True when `category` passes this filter.
    #[inline(always)]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Name(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Weights applied by the relevance ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankWeights {
    /// Points granted when a token appears anywhere in a record's
    /// searchable text. Default: 2
    pub combined: u32,
    /// Extra points granted when a token appears in the question
    /// itself. Default: 2
    pub question: u32,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            combined: 2,
            question: 2,
        }
    }
}

impl RankWeights {
    /// Creates weights that score presence alone, without the
    /// question bonus.
    pub const fn flat() -> Self {
        Self {
            combined: 2,
            question: 0,
        }
    }
}

/// One page of records cut from a larger result sequence.
///
/// Pages borrow from the sequence they were cut from; they are a
/// view, not a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Records on this page, in sequence order.
    pub items: Vec<&'a Record>,
    /// 1-based number of this page.
    pub page_number: usize,
    /// Total pages in the sequence; at least 1 even when empty.
    pub total_pages: usize,
}

impl<'a> Page<'a> {
    /// Number of records on this page.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when this page carries no records.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when a page precedes this one.
    #[inline(always)]
    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }

    /// True when a page follows this one.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}

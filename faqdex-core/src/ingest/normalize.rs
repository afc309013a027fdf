//! Row-to-record normalization.
//!
//! Second stage of the ingest pipeline: shapes raw CSV rows into clean
//! [`Record`]s. Columns are matched by header name rather than position,
//! so a reordered or partial CSV still ingests. Cells are trimmed, rows
//! without a question are dropped, blank categories fall back to
//! [`OTHER_CATEGORY`], and the date column is parsed once into a
//! sortable key. The result comes back ordered newest first.

use core::mem;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use faqdex_types::{DateKey, Record, OTHER_CATEGORY};

use crate::ingest::csv::Row;

/// Header label of the question column.
pub const COL_QUESTION: &str = "question";
/// Header label of the keywords column.
pub const COL_KEYWORDS: &str = "keywords";
/// Header label of the category column.
pub const COL_CATEGORY: &str = "category";
/// Header label of the short-answer column.
pub const COL_ANSWER_SHORT: &str = "answer_short";
/// Header label of the step-by-step answer column.
pub const COL_ANSWER_STEPS: &str = "answer_steps";
/// Header label of the last-updated column.
pub const COL_LAST_UPDATED: &str = "last_updated";
/// Header label of the source-note column.
pub const COL_SOURCE_NOTE: &str = "source_note";

/// Resolved column positions for one CSV header.
struct ColumnMap {
    question: Option<usize>,
    keywords: Option<usize>,
    category: Option<usize>,
    answer_short: Option<usize>,
    answer_steps: Option<usize>,
    last_updated: Option<usize>,
    source_note: Option<usize>,
}

impl ColumnMap {
    /// Maps known column names to positions in `header`. Header cells
    /// are trimmed before matching, a leading BOM included; when a
    /// name repeats, the first occurrence wins.
    fn resolve(header: &[String]) -> Self {
        let mut by_name: FxHashMap<&str, usize> = FxHashMap::default();
        for (position, name) in header.iter().enumerate() {
            // Spreadsheet exports open with a BOM that lands on the
            // first header cell; `str::trim` does not cover U+FEFF.
            let name = name.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
            by_name.entry(name).or_insert(position);
        }

        Self {
            question: by_name.get(COL_QUESTION).copied(),
            keywords: by_name.get(COL_KEYWORDS).copied(),
            category: by_name.get(COL_CATEGORY).copied(),
            answer_short: by_name.get(COL_ANSWER_SHORT).copied(),
            answer_steps: by_name.get(COL_ANSWER_STEPS).copied(),
            last_updated: by_name.get(COL_LAST_UPDATED).copied(),
            source_note: by_name.get(COL_SOURCE_NOTE).copied(),
        }
    }
}

/// Takes the cell at `position` out of the row, trimmed. Missing
/// columns and rows shorter than the header read as empty.
fn take_cell(row: &mut Row, position: Option<usize>) -> String {
    position
        .and_then(|p| row.get_mut(p))
        .map(|cell| trim_owned(mem::take(cell)))
        .unwrap_or_default()
}

/// Keeps the allocation when the text has no edge whitespace.
fn trim_owned(text: String) -> String {
    let trimmed = text.trim();
    if trimmed.len() == text.len() {
        text
    } else {
        trimmed.to_string()
    }
}

/// Builds records out of parsed rows.
///
/// The first row is the header; the rest become records. Rows without
/// a question are dropped. The result is sorted newest first by date
/// key; records with equal keys keep their source order, and undated
/// records sink to the end.
#[must_use]
pub fn records(rows: Vec<Row>) -> Vec<Record> {
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let columns = ColumnMap::resolve(&header);

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (index, mut row) in rows.enumerate() {
        let question = take_cell(&mut row, columns.question);
        if question.is_empty() {
            dropped += 1;
            debug!(row = index + 2, "dropped row without a question");
            continue;
        }

        let last_updated = take_cell(&mut row, columns.last_updated);
        let updated_key = DateKey::from_text(&last_updated);

        let mut category = take_cell(&mut row, columns.category);
        if category.is_empty() {
            category = OTHER_CATEGORY.to_string();
        }

        records.push(Record {
            question,
            keywords: take_cell(&mut row, columns.keywords),
            category,
            answer_short: take_cell(&mut row, columns.answer_short),
            answer_steps: take_cell(&mut row, columns.answer_steps),
            last_updated,
            source_note: take_cell(&mut row, columns.source_note),
            updated_key,
        });
    }

    // Stable sort: equal keys keep their source order.
    records.sort_by(|a, b| b.updated_key.cmp(&a.updated_key));

    info!(records = records.len(), dropped, "normalized ingest rows");

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::csv;

    const SAMPLE: &str = "\
question,keywords,category,answer_short,answer_steps,last_updated,source_note
q-old,kw,Repairs,short,steps,2026-01-05,office
q-new,kw,Water,short,steps,2026-02-13,office
q-undated,kw,,short,steps,,office
,kw,Water,orphan,steps,2026-02-14,office
";

    fn sample_records() -> Vec<Record> {
        records(csv::parse(SAMPLE))
    }

    #[test]
    fn rows_without_question_are_dropped() {
        let records = sample_records();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| !r.question.is_empty()));
    }

    #[test]
    fn newest_first_with_undated_last() {
        let questions: Vec<String> = sample_records()
            .into_iter()
            .map(|r| r.question)
            .collect();
        assert_eq!(questions, vec!["q-new", "q-old", "q-undated"]);
    }

    #[test]
    fn blank_category_defaults() {
        let records = sample_records();
        let undated = records
            .iter()
            .find(|r| r.question == "q-undated")
            .unwrap();
        assert_eq!(undated.category, OTHER_CATEGORY);
    }

    #[test]
    fn raw_date_text_is_preserved() {
        let records = sample_records();
        let newest = &records[0];
        assert_eq!(newest.last_updated, "2026-02-13");
        assert_eq!(newest.updated_key, DateKey(20260213));
    }

    #[test]
    fn header_maps_by_name_not_position() {
        let text = "\
category,question,last_updated
Water,low pressure,2026-02-01
";
        let records = records(csv::parse(text));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "low pressure");
        assert_eq!(records[0].category, "Water");
        assert_eq!(records[0].updated_key, DateKey(20260201));
    }

    #[test]
    fn duplicate_header_first_occurrence_wins() {
        let text = "\
question,question
real,shadow
";
        let records = records(csv::parse(text));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "real");
    }

    #[test]
    fn header_and_cells_are_trimmed() {
        let text = " question , category \n  leaky tap  ,  Water  \n";
        let records = records(csv::parse(text));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "leaky tap");
        assert_eq!(records[0].category, "Water");
    }

    #[test]
    fn bom_on_first_header_cell_still_resolves() {
        let text = "\u{feff}question,category\nwifi down?,Network\n";
        let records = records(csv::parse(text));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "wifi down?");
        assert_eq!(records[0].category, "Network");
    }

    #[test]
    fn missing_columns_read_empty() {
        let text = "question\nwifi password\n";
        let records = records(csv::parse(text));
        assert_eq!(records.len(), 1);
        assert!(records[0].keywords.is_empty());
        assert!(records[0].source_note.is_empty());
        assert_eq!(records[0].category, OTHER_CATEGORY);
        assert_eq!(records[0].updated_key, DateKey::ZERO);
    }

    #[test]
    fn rows_shorter_than_header_read_empty() {
        let text = "\
question,keywords,category
short row
";
        let records = records(csv::parse(text));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "short row");
        assert!(records[0].keywords.is_empty());
    }

    #[test]
    fn ties_keep_source_order() {
        let text = "\
question,last_updated
first,2026-02-10
second,2026-02-10
third,2026-02-10
";
        let questions: Vec<String> = records(csv::parse(text))
            .into_iter()
            .map(|r| r.question)
            .collect();
        assert_eq!(questions, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_and_header_only_inputs() {
        assert!(records(Vec::new()).is_empty());
        assert!(records(csv::parse("question,category\n")).is_empty());
    }

    #[test]
    fn whitespace_question_counts_as_missing() {
        let text = "question,category\n   ,Water\n";
        assert!(records(csv::parse(text)).is_empty());
    }
}

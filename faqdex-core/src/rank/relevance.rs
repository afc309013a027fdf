//! Query relevance ranking.
//!
//! Scores every record against a free-text query and orders hits best
//! first. The query is matched two ways: as the whole trimmed phrase
//! and as each whitespace-separated word, all lowercased and
//! deduplicated. A token found anywhere in a record's searchable text
//! earns [`RankWeights::combined`] points; a token found in the
//! question itself earns [`RankWeights::question`] more, so question
//! hits outrank body hits. Records scoring zero drop out entirely.
//!
//! Ordering is stable: equal scores keep their incoming order, so a
//! newest-first input stays newest first within each score band.

use smallvec::SmallVec;

use faqdex_types::{RankWeights, Record};

/// Query tokens kept inline before spilling to the heap.
const INLINE_TOKENS: usize = 8;

/// Scored records kept inline while sorting.
const INLINE_HITS: usize = 64;

/// Ranks `records` against `query` with default weights.
#[must_use]
pub fn by_relevance<'a>(records: &[&'a Record], query: &str) -> Vec<&'a Record> {
    by_relevance_with(records, query, RankWeights::default())
}

/// Ranks `records` against `query` with caller-chosen weights.
///
/// A blank query matches everything: the input comes back unchanged,
/// keeping its incoming (typically newest-first) order.
#[must_use]
pub fn by_relevance_with<'a>(
    records: &[&'a Record],
    query: &str,
    weights: RankWeights,
) -> Vec<&'a Record> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    let tokens = token_set(&needle);
    let mut hay = String::new();
    let mut hits: SmallVec<[(u32, &'a Record); INLINE_HITS]> = SmallVec::new();

    for &record in records {
        let score = score_record(record, &tokens, weights, &mut hay);
        if score > 0 {
            hits.push((score, record));
        }
    }

    // Stable sort: equal scores keep their incoming order.
    hits.sort_by(|a, b| b.0.cmp(&a.0));

    hits.into_iter().map(|(_, record)| record).collect()
}

/// Distinct match tokens for a non-empty, pre-lowercased needle: the
/// whole phrase first, then each word of it.
fn token_set(needle: &str) -> SmallVec<[&str; INLINE_TOKENS]> {
    let mut tokens: SmallVec<[&str; INLINE_TOKENS]> = SmallVec::new();
    tokens.push(needle);
    for word in needle.split_whitespace() {
        if !tokens.contains(&word) {
            tokens.push(word);
        }
    }
    tokens
}

/// Scores one record. `hay` is caller-owned scratch reused across
/// records to avoid an allocation per row.
fn score_record(record: &Record, tokens: &[&str], weights: RankWeights, hay: &mut String) -> u32 {
    hay.clear();
    push_lower(hay, &record.question);
    let question_end = hay.len();
    for part in [
        &record.keywords,
        &record.category,
        &record.answer_short,
        &record.answer_steps,
    ] {
        hay.push(' ');
        push_lower(hay, part);
    }

    let mut score = 0u32;
    for &token in tokens {
        if hay.contains(token) {
            score += weights.combined;
        }
    }

    let question_hay = &hay[..question_end];
    for &token in tokens {
        if question_hay.contains(token) {
            score += weights.question;
        }
    }

    score
}

/// Appends `text` lowercased with the same mapping the needle gets;
/// per-char lowering misses context forms like Greek final sigma.
#[inline(always)]
fn push_lower(buf: &mut String, text: &str) {
    buf.push_str(&text.to_lowercase());
}

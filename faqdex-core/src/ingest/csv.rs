//! Streaming CSV Reader Module
//!
//! This module provides a quote-aware CSV reader that splits raw text into
//! rows of cells. It's the first stage of the ingest pipeline, turning one
//! big string into the row structure the normalizer shapes into records.
//!
//! ## What It Does
//!
//! Given input like `a,b\n"c,d",e`, it emits each row as a vector of cells:
//!
//! ```ignore
//! ["a", "b"]
//! ["c,d", "e"]
//! ```
//!
//! ## Key Features
//!
//! - **Quote-aware**: Commas and newlines inside `"..."` stay literal
//! - **Streaming**: Rows are emitted through a callback, no intermediate
//!   collection required
//! - **Total**: Never fails; malformed input degrades to odd cells, not
//!   errors
//! - **Fast**: Quoted runs are bulk-copied up to the next quote byte
//!
//! ## The Format
//!
//! The reader recognizes exactly four structural bytes outside quotes:
//! `"` opens a quoted run, `,` ends a cell, and `\n` / `\r` / `\r\n` end a
//! row. Inside a quoted run, a doubled `""` is a literal quote and every
//! other byte is cell content. Rules for the rough edges:
//!
//! - A quote in the middle of a cell starts a quoted run mid-cell; the
//!   surrounding fragments glue together
//! - A quoted run that never closes absorbs the rest of the input into
//!   the current cell
//! - Rows whose cells are all empty (such as `,,,` or a trailing newline)
//!   are dropped
//! - Cells are not trimmed; whitespace handling belongs to the normalizer

use core::mem;

use memchr::memchr;

/// One parsed CSV row: the cells between commas, in column order.
pub type Row = Vec<String>;

/// Parses CSV text into rows, dropping rows whose cells are all empty.
#[must_use]
pub fn parse(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    parse_each(text, |row| rows.push(row));
    rows
}

/// Parses CSV text and emits each row through `emit`.
///
/// Rows arrive in input order. Rows whose cells are all empty are
/// skipped, so `emit` never sees the phantom row a trailing newline
/// would otherwise produce.
pub fn parse_each<F>(text: &str, mut emit: F)
where
    F: FnMut(Row),
{
    let bytes = text.as_bytes();
    let mut row: Row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut i = 0usize;

    while i < bytes.len() {
        if in_quotes {
            if bytes[i] == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    cell.push('"');
                    i += 2;
                } else {
                    in_quotes = false;
                    i += 1;
                }
            } else {
                // Bulk-copy the quoted run up to the next quote, or to the
                // end of input when the quote never closes.
                let end = match memchr(b'"', &bytes[i..]) {
                    Some(offset) => i + offset,
                    None => bytes.len(),
                };
                cell.push_str(&text[i..end]);
                i = end;
            }
            continue;
        }

        match bytes[i] {
            b'"' => {
                in_quotes = true;
                i += 1;
            }
            b',' => {
                row.push(mem::take(&mut cell));
                i += 1;
            }
            b'\r' | b'\n' => {
                if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    i += 2;
                } else {
                    i += 1;
                }
                row.push(mem::take(&mut cell));
                flush(&mut row, &mut emit);
            }
            _ => {
                // Plain run: copy everything up to the next structural byte.
                // Structural bytes are ASCII, so the slice below always
                // lands on UTF-8 boundaries.
                let mut end = i + 1;
                while end < bytes.len() && !is_structural(bytes[end]) {
                    end += 1;
                }
                cell.push_str(&text[i..end]);
                i = end;
            }
        }
    }

    row.push(cell);
    flush(&mut row, &mut emit);
}

#[inline(always)]
const fn is_structural(byte: u8) -> bool {
    matches!(byte, b'"' | b',' | b'\r' | b'\n')
}

fn flush<F>(row: &mut Row, emit: &mut F)
where
    F: FnMut(Row),
{
    if row.iter().any(|cell| !cell.is_empty()) {
        emit(mem::take(row));
    } else {
        row.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn single_row() {
        assert_eq!(parse("a,b,c"), vec![row(&["a", "b", "c"])]);
    }

    #[test]
    fn mixed_line_endings() {
        let rows = parse("a,b\nc,d\r\ne,f\rg,h");
        assert_eq!(
            rows,
            vec![
                row(&["a", "b"]),
                row(&["c", "d"]),
                row(&["e", "f"]),
                row(&["g", "h"]),
            ]
        );
    }

    #[test]
    fn quoted_cell_keeps_commas_and_newlines() {
        let rows = parse("\"a,b\nc\"\"d\"");
        assert_eq!(rows, vec![row(&["a,b\nc\"d"])]);
    }

    #[test]
    fn doubled_quote_is_literal() {
        let rows = parse("\"say \"\"hi\"\"\",x");
        assert_eq!(rows, vec![row(&["say \"hi\"", "x"])]);
    }

    #[test]
    fn all_empty_row_dropped() {
        let rows = parse("a,b\n,,,\nc,d");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn whitespace_only_row_kept() {
        let rows = parse("a\n \nb");
        assert_eq!(rows, vec![row(&["a"]), row(&[" "]), row(&["b"])]);
    }

    #[test]
    fn trailing_newline_no_phantom_row() {
        assert_eq!(parse("a,b\n"), vec![row(&["a", "b"])]);
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn empty_cells_kept_when_row_has_content() {
        assert_eq!(parse("a,,c"), vec![row(&["a", "", "c"])]);
    }

    #[test]
    fn unterminated_quote_absorbs_rest() {
        assert_eq!(parse("a,\"bc\nd,e"), vec![row(&["a", "bc\nd,e"])]);
    }

    #[test]
    fn quote_mid_cell_glues_fragments() {
        assert_eq!(parse("a\"b,c\"d"), vec![row(&["ab,cd"])]);
    }

    #[test]
    fn cells_are_not_trimmed() {
        assert_eq!(parse(" a , b "), vec![row(&[" a ", " b "])]);
    }

    #[test]
    fn multibyte_content_passes_through() {
        let rows = parse("熱水器沒熱水,\"水壓,不足\"");
        assert_eq!(rows, vec![row(&["熱水器沒熱水", "水壓,不足"])]);
    }

    #[test]
    fn emit_order_is_top_to_bottom() {
        let mut seen = Vec::new();
        parse_each("a\nb\nc", |r| seen.push(r[0].clone()));
        assert_eq!(seen, vec!["a", "b", "c"]);
    }
}

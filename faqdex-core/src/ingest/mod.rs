//! CSV ingest pipeline.
//!
//! Two stages shape raw text into knowledge-base records:
//! - **csv**: Splits quote-aware CSV text into rows of cells
//! - **normalize**: Matches columns by header name, trims cells,
//!   derives date keys, and orders records newest first
//!
//! Both stages are total. Malformed input degrades to odd cells or
//! dropped rows, never an error.

pub mod csv;
pub mod normalize;

pub use csv::{parse, parse_each, Row};
pub use normalize::records;

//! Record ordering strategies.
//!
//! Two stateless strategies shape what a reader sees first:
//! - **relevance**: Token scoring against a free-text query
//! - **completeness**: Detail-first ordering for the no-query landing
//!   view
//!
//! Both take and return borrowed records, so they compose with
//! faceting and pagination without copying record data.

pub mod completeness;
pub mod relevance;

pub use completeness::by_completeness;
pub use relevance::{by_relevance, by_relevance_with};

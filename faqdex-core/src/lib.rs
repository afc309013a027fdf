//! Faqdex core: an in-memory FAQ knowledge base.
//!
//! CSV text goes in through [`ingest`], records come back queryable
//! through [`base::KnowledgeBase`], and the stateless [`rank`],
//! [`page`], and [`recency`] helpers shape views over borrowed records
//! without copying them.
//!
//! ```
//! use faqdex_core::base::{KnowledgeBase, DEFAULT_PAGE_SIZE};
//! use faqdex_core::{page, rank};
//! use faqdex_types::CategoryFilter;
//!
//! let kb = KnowledgeBase::ingest("question,category\nwifi down?,Network\n");
//! let hits = rank::by_relevance(&kb.select(&CategoryFilter::All), "wifi");
//! let first = page::paginate(&hits, DEFAULT_PAGE_SIZE, 1);
//! assert_eq!(first.len(), 1);
//! ```

pub mod base;
pub mod ingest;
pub mod page;
pub mod rank;
pub mod recency;

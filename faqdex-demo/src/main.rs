//! Command-line demo for the Faqdex knowledge base.
//!
//! Loads a FAQ CSV (a bundled sample by default) and prints what the
//! landing view of a FAQ site would show: the stats line, the category
//! chips, the most detailed entries of the current view as top picks,
//! and one page of results for an optional query, with NEW badges on
//! fresh updates.
//!
//! ```bash
//! faqdex-demo [path/to/faq.csv] [query] [page] [category]
//!
//! # Rank the bundled sample against a query
//! faqdex-demo - 水壓
//!
//! # Page 2 of everything in one category
//! faqdex-demo data/faq.csv "" 2 報修
//! ```
//!
//! Logging goes to stderr and honors `RUST_LOG`; the rendered output
//! stays on stdout.

use std::env;
use std::fs;
use std::process;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use faqdex_core::base::{KnowledgeBase, DEFAULT_PAGE_SIZE, RECENT_WINDOW_DAYS, TOP_PICKS_LIMIT};
use faqdex_core::{page, rank, recency};
use faqdex_types::CategoryFilter;

const SAMPLE: &str = include_str!("../data/sample.csv");

fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.get(1).is_some_and(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: faqdex-demo [csv-path|-] [query] [page] [category]");
        process::exit(0);
    }

    // "-" keeps the bundled sample while still allowing later arguments.
    let csv = match args.get(1).map(String::as_str) {
        Some("-") | None => SAMPLE.to_string(),
        Some(path) => fs::read_to_string(path)?,
    };
    let query = args.get(2).map(String::as_str).unwrap_or("");
    let requested_page = args
        .get(3)
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(1);
    let category = match args.get(4) {
        Some(name) => CategoryFilter::Name(name.clone()),
        None => CategoryFilter::All,
    };

    let kb = KnowledgeBase::ingest(&csv);
    if kb.is_empty() {
        eprintln!("no records ingested; check the CSV header and rows");
        process::exit(1);
    }

    let today = Local::now().date_naive();

    println!("faqdex: {}", kb.stats());
    println!();
    println!("Categories: {}", kb.categories().join(" | "));

    let selected = kb.select(&category);
    let ranked = rank::by_relevance(&selected, query);

    // Picks track the active filter and query, same as the result pages.
    let mut picks = rank::by_completeness(&ranked);
    picks.truncate(TOP_PICKS_LIMIT);

    println!();
    println!("Top picks:");
    for record in &picks {
        println!("  [{}] {}", record.category, record.question);
    }

    let view = page::paginate(&ranked, DEFAULT_PAGE_SIZE, requested_page);

    println!();
    if query.trim().is_empty() {
        println!(
            "All entries ({}), page {} of {}:",
            category, view.page_number, view.total_pages
        );
    } else {
        println!(
            "Results for {:?} ({}), page {} of {}:",
            query, category, view.page_number, view.total_pages
        );
    }

    if view.is_empty() {
        println!("  nothing matched; try another keyword");
    }

    for record in &view.items {
        let badge = if recency::is_recent(record.updated_key, RECENT_WINDOW_DAYS, today) {
            " [NEW]"
        } else {
            ""
        };
        println!("- {}{}", record.question, badge);
        if !record.answer_short.is_empty() {
            println!("    {}", record.answer_short);
        }
        if !record.last_updated.is_empty() {
            println!("    updated {}", record.last_updated);
        }
    }

    if view.has_prev() || view.has_next() {
        println!();
        println!(
            "(page {} of {}; pass a page number as the third argument)",
            view.page_number, view.total_pages
        );
    }

    Ok(())
}

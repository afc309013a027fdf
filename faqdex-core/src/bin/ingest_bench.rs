//! CSV Ingest Benchmarking Tool
//!
//! This binary measures the ingest and search pipeline on a real CSV
//! file, giving realistic numbers for the data sizes the knowledge
//! base is built for.
//!
//! ## What It Benchmarks
//!
//! 1. **Parse**: Raw CSV text to rows of cells
//! 2. **Ingest**: The full build (parse + normalize + facet)
//! 3. **Search**: Relevance ranking over the built base
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/ingest_bench /path/to/faq.csv
//!
//! # Rank with a different query than the default
//! ./target/release/ingest_bench /path/to/faq.csv 水壓
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Parse ===
//! --------------------------------
//! Mode        : Parse
//! Elapsed     : 0.003 s
//! Throughput  : 221.014 MiB/s
//! Rows        : 12_041
//! Rows/sec    : 4_013_666
//! --------------------------------
//! ```
//!
//! ## Tips for Accurate Results
//!
//! - Build with `--release`
//! - Use a file big enough for stable timing (repeat the data if needed)
//! - Consider `taskset` to pin to one CPU core

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use faqdex_core::base::KnowledgeBase;
use faqdex_core::{ingest, rank};
use faqdex_types::Record;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: ingest_bench <path> [query]");
        std::process::exit(1);
    }

    let path = &args[1];
    let query = args.get(2).map(String::as_str).unwrap_or("water");

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes).expect("input must be valid UTF-8");

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Query:     {:?}\n", query);

    bench_parse(input);
    bench_ingest(input);
    bench_search(input, query);

    Ok(())
}

fn bench_parse(input: &str) {
    println!("=== Parse ===");

    warmup(|| {
        std::hint::black_box(ingest::csv::parse(input));
    });

    let mut rows = 0u64;
    let elapsed = measure(|| {
        let parsed = ingest::csv::parse(input);
        rows = parsed.len() as u64;
        std::hint::black_box(&parsed);
    });

    print_perf("Parse", input.len(), elapsed, "Rows", rows);
}

fn bench_ingest(input: &str) {
    println!("=== Ingest (parse + normalize + facet) ===");

    warmup(|| {
        std::hint::black_box(KnowledgeBase::ingest(input).len());
    });

    let mut records = 0u64;
    let elapsed = measure(|| {
        let kb = KnowledgeBase::ingest(input);
        records = kb.len() as u64;
        std::hint::black_box(records);
    });

    print_perf("Ingest", input.len(), elapsed, "Records", records);
}

fn bench_search(input: &str, query: &str) {
    let kb = KnowledgeBase::ingest(input);
    let all: Vec<&Record> = kb.records().iter().collect();

    println!("=== Search ===");

    warmup(|| {
        std::hint::black_box(rank::by_relevance(&all, query).len());
    });

    let mut hits = 0u64;
    let elapsed = measure(|| {
        let ranked = rank::by_relevance(&all, query);
        hits = ranked.len() as u64;
        std::hint::black_box(hits);
    });

    print_perf("Search", 0, elapsed, "Hits", hits);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, count_label: &str, count: u64) {
    let secs = elapsed.as_secs_f64();

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);

    if input_bytes > 0 {
        let mib = input_bytes as f64 / (1024.0 * 1024.0);
        println!("Throughput  : {:.3} MiB/s", mib / secs);
    }

    if count > 0 {
        println!("{:<12}: {}", count_label, fmt_count(count));
        let rate = format!("{}/sec", count_label);
        println!("{:<12}: {}", rate, fmt_count((count as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}

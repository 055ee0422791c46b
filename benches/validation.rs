//! Benchmark suite for validators and processing strategies
//!
//! Measures the individual field validators and compares the synchronous and
//! asynchronous processing strategies using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Fixtures
//!
//! Three representative CSV files are used:
//! - `benchmark_small.csv` - Small dataset (100 payout methods)
//! - `benchmark_medium.csv` - Medium dataset (1,000 payout methods)
//! - `benchmark_large.csv` - Large dataset (20,000 payout methods)
//!
//! Each fixture mixes every method type with valid and invalid details, disposable
//! email domains and unknown types.

use divan::black_box;
use payout_method_validator::cli::{OutputFormat, StrategyType};
use payout_method_validator::core::{
    sanitize_payout_details, validate_email, validate_payout_method, validate_routing_number,
    validate_stripe_account_id,
};
use payout_method_validator::strategy::{create_strategy, BatchConfig};
use payout_method_validator::PayoutDetails;
use std::path::Path;

const FIXTURES: [&str; 3] = ["small", "medium", "large"];

fn main() {
    divan::main();
}

fn bank_transfer_details() -> PayoutDetails {
    [
        ("account_holder_name", "Jane Doe"),
        ("bank_name", "First National Bank"),
        ("account_number", "123456789"),
        ("routing_number", "021000021"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

#[divan::bench(args = ["artist@example.com", "not-an-email", "band.manager+payouts@studio.co.uk"])]
fn email(email: &str) {
    let _ = black_box(validate_email(black_box(email)));
}

#[divan::bench(args = ["021000021", "021000022", "026-009-593"])]
fn routing_number(routing_number: &str) {
    let _ = black_box(validate_routing_number(black_box(routing_number)));
}

#[divan::bench]
fn stripe_account_id() {
    let _ = black_box(validate_stripe_account_id(black_box(
        "acct_1A2b3C4d5E6f7G8h9I0j",
    )));
}

#[divan::bench]
fn bank_transfer_method(bencher: divan::Bencher) {
    let details = bank_transfer_details();
    bencher.bench_local(|| black_box(validate_payout_method("bank_transfer", black_box(&details))));
}

#[divan::bench]
fn bank_transfer_redaction(bencher: divan::Bencher) {
    let details = bank_transfer_details();
    bencher.bench_local(|| {
        black_box(sanitize_payout_details("bank_transfer", black_box(&details)))
    });
}

/// Benchmark synchronous processing strategy
#[divan::bench(args = FIXTURES)]
fn sync_strategy(fixture: &str) {
    let strategy = create_strategy(StrategyType::Sync, None, OutputFormat::Csv);
    let path = format!("benches/fixtures/benchmark_{}.csv", fixture);
    let mut output = Vec::new();

    strategy
        .process(Path::new(&path), &mut output)
        .expect("Processing failed");
}

/// Benchmark asynchronous processing strategy
#[divan::bench(args = FIXTURES)]
fn async_strategy(fixture: &str) {
    let strategy = create_strategy(
        StrategyType::Async,
        Some(BatchConfig::default()),
        OutputFormat::Csv,
    );
    let path = format!("benches/fixtures/benchmark_{}.csv", fixture);
    let mut output = Vec::new();

    strategy
        .process(Path::new(&path), &mut output)
        .expect("Processing failed");
}

/// Benchmark JSON Lines output on the medium dataset
#[divan::bench]
fn sync_strategy_json_medium() {
    let strategy = create_strategy(StrategyType::Sync, None, OutputFormat::Json);
    let path = Path::new("benches/fixtures/benchmark_medium.csv");
    let mut output = Vec::new();

    strategy
        .process(path, &mut output)
        .expect("Processing failed");
}

//! Payout Method Validator CLI
//!
//! Command-line interface for validating stored payout methods from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payout_methods.csv > report.csv
//! cargo run -- --strategy sync payout_methods.csv > report.csv
//! cargo run -- --output json payout_methods.csv > report.jsonl
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 payout_methods.csv > report.csv
//! ```
//!
//! The program reads payout method records from the input CSV file, validates each one
//! and writes a report with redacted details to stdout. Logs go to stderr and are
//! filtered with `RUST_LOG` (default `payout_method_validator=info`).
//!
//! # Processing Strategies
//!
//! - **sync**: Synchronous CSV parsing with single-threaded validation
//! - **async**: Asynchronous batch processing with multi-threaded validation (default)
//!
//! # Exit Codes
//!
//! - 0: Success, including inputs containing invalid payout methods
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use payout_method_validator::cli;
use payout_method_validator::strategy;
use std::process;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payout_method_validator=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config, args.output)
    };

    // Reports go to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        error!(error = %e, "Validation pipeline failed");
        process::exit(1);
    }
}

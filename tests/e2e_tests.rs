//! End-to-end integration tests
//!
//! These tests run the complete validation pipeline over predefined CSV fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Validates and redacts every payout method record
//! 3. Generates the report CSV
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Valid methods of every type, including optional bank fields
//! - Field errors, with every failing field reported at once
//! - Unknown and differently-cased method types
//! - Disposable email advisories
//! - Malformed records, which are skipped without renumbering the rest
//! - Inputs that omit detail columns
//!
//! Each test is run twice: once with the synchronous strategy and once with the async strategy.

#[cfg(test)]
mod tests {
    use payout_method_validator::cli::{OutputFormat, StrategyType};
    use payout_method_validator::strategy::{create_strategy, BatchConfig};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn fixture_path(fixture_name: &str, file: &str) -> String {
        format!("tests/fixtures/{}/{}", fixture_name, file)
    }

    /// Run a fixture through `strategy_type` and return the report text
    fn run_strategy(
        fixture_name: &str,
        strategy_type: StrategyType,
        config: Option<BatchConfig>,
        format: OutputFormat,
    ) -> String {
        let input_path = fixture_path(fixture_name, "input.csv");
        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let strategy = create_strategy(strategy_type, config, format);
        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process payout methods: {}", e));

        temp_output.flush().expect("Failed to flush temp file");
        fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e))
    }

    /// Process input.csv of a fixture and compare the report with expected.csv
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType) {
        let expected_path = fixture_path(fixture_name, "expected.csv");
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        let actual_output =
            run_strategy(fixture_name, strategy_type.clone(), None, OutputFormat::Csv);

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures with both processing strategies
    #[rstest]
    #[case("valid_methods")]
    #[case("invalid_fields")]
    #[case("unknown_types")]
    #[case("disposable_emails")]
    #[case("malformed_data")]
    #[case("partial_columns")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy);
    }

    /// Small batches spread over many workers still produce reports in input order
    #[rstest]
    #[case("valid_methods")]
    #[case("invalid_fields")]
    #[case("malformed_data")]
    fn test_fixtures_with_small_batches(#[case] fixture: &str) {
        let expected_output = fs::read_to_string(fixture_path(fixture, "expected.csv"))
            .expect("Failed to read expected file");

        let actual_output = run_strategy(
            fixture,
            StrategyType::Async,
            Some(BatchConfig::new(2, 3)),
            OutputFormat::Csv,
        );

        assert_eq!(actual_output, expected_output);
    }

    /// JSON output carries the same verdicts as the CSV report, one object per line
    #[rstest]
    fn test_json_output_matches_csv_verdicts(
        #[values("valid_methods", "invalid_fields", "unknown_types")] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let json_output = run_strategy(fixture, strategy, None, OutputFormat::Json);
        let expected_csv = fs::read_to_string(fixture_path(fixture, "expected.csv"))
            .expect("Failed to read expected file");

        let expected_verdicts: Vec<(u64, bool)> = expected_csv
            .lines()
            .skip(1)
            .map(|line| {
                let mut columns = line.split(',');
                let row = columns.next().unwrap().parse().unwrap();
                let valid = columns.nth(1).unwrap() == "true";
                (row, valid)
            })
            .collect();

        let actual_verdicts: Vec<(u64, bool)> = json_output
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                (
                    value["row"].as_u64().unwrap(),
                    value["is_valid"].as_bool().unwrap(),
                )
            })
            .collect();

        assert_eq!(actual_verdicts, expected_verdicts);
    }

    #[test]
    fn test_json_output_invalid_bank_transfer() {
        let json_output = run_strategy(
            "invalid_fields",
            StrategyType::Sync,
            None,
            OutputFormat::Json,
        );

        let line = json_output
            .lines()
            .find(|line| line.starts_with("{\"row\":9,"))
            .expect("row 9 missing from output");
        let value: serde_json::Value = serde_json::from_str(line).unwrap();

        assert_eq!(value["type"], "bank_transfer");
        assert_eq!(value["is_valid"], false);
        assert_eq!(
            value["errors"],
            serde_json::json!({
                "account_holder_name": "Account holder name is required",
                "account_number": "Account number is required",
                "bank_name": "Bank name is required",
                "routing_number": "Routing number is required",
            })
        );
        assert_eq!(value["details"], serde_json::json!({}));
    }

    #[rstest]
    fn test_missing_input_file_fails(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy_type: StrategyType,
    ) {
        let strategy = create_strategy(strategy_type, None, OutputFormat::Csv);
        let mut output = Vec::new();

        let error = strategy
            .process(Path::new("tests/fixtures/does_not_exist.csv"), &mut output)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "File not found: tests/fixtures/does_not_exist.csv"
        );
        assert!(output.is_empty());
    }
}

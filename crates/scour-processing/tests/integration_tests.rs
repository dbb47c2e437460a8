//! Integration tests for the analysis and cleaning pipeline.
//!
//! These tests run the full file-in/file-out flow against CSV fixtures and
//! verify the report invariants the pipeline guarantees.

use std::fs;
use std::path::{Path, PathBuf};

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use scour_processing::{DataAnalyzer, DataCleaner};

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy a fixture into a scratch directory so the `_cleaned` output lands
/// there instead of polluting the fixture tree.
fn stage(filename: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let dest = dir.path().join(filename);
    fs::copy(fixtures_path().join(filename), &dest).expect("Failed to copy fixture");
    (dir, dest)
}

fn load_csv(path: &Path) -> DataFrame {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .expect("Failed to create CSV reader")
        .finish()
        .expect("Failed to read CSV file")
}

// ============================================================================
// Scenario A: no defects
// ============================================================================

#[test]
fn test_clean_dataset_passes_through_untouched() {
    let (dir, path) = stage("clean_10x3.csv");

    let analysis = DataAnalyzer::analyze(&path).unwrap();
    assert_eq!(analysis.total_rows, 10);
    assert_eq!(analysis.total_columns, 3);
    assert_eq!(analysis.duplicate_rows, 0);
    assert_eq!(analysis.missing_values.values().sum::<usize>(), 0);

    let cleaning = DataCleaner::clean(&path).unwrap();
    assert_eq!(cleaning.rows_before, 10);
    assert_eq!(cleaning.rows_after, 10);
    assert_eq!(cleaning.duplicates_removed, 0);
    assert_eq!(cleaning.missing_values_fixed, 0);
    assert_eq!(cleaning.data_quality_score, 100);
    assert!(cleaning.steps.is_empty());

    let out = load_csv(&dir.path().join("clean_10x3_cleaned.csv"));
    assert_eq!(out.height(), 10);
    assert_eq!(out.width(), 3);
}

// ============================================================================
// Scenario B: duplicates only
// ============================================================================

#[test]
fn test_duplicates_are_dropped_keep_first() {
    let (dir, path) = stage("duplicates_10.csv");

    // One row pattern occurs three times: two extra occurrences
    let analysis = DataAnalyzer::analyze(&path).unwrap();
    assert_eq!(analysis.total_rows, 10);
    assert_eq!(analysis.duplicate_rows, 2);

    let cleaning = DataCleaner::clean(&path).unwrap();
    assert_eq!(cleaning.rows_before, 10);
    assert_eq!(cleaning.duplicates_removed, 2);
    assert_eq!(cleaning.rows_after, 8);
    assert_eq!(cleaning.steps.len(), 1);
    assert!(cleaning.steps[0].contains("Removed 2 duplicate rows"));
    // 100 - 2 duplicates
    assert_eq!(cleaning.data_quality_score, 98);

    let out = load_csv(&dir.path().join("duplicates_10_cleaned.csv"));
    assert_eq!(out.height(), 8);
    // Keep-first: the surviving "grace" row is still at its original slot
    let ids = out.column("id").unwrap();
    assert_eq!(ids.get(1).unwrap().try_extract::<i64>().unwrap(), 2);
    assert_eq!(ids.get(2).unwrap().try_extract::<i64>().unwrap(), 3);
}

// ============================================================================
// Scenario C: mixed missing values
// ============================================================================

#[test]
fn test_mixed_missing_values_are_imputed() {
    let (dir, path) = stage("mixed_missing_20.csv");

    let analysis = DataAnalyzer::analyze(&path).unwrap();
    assert_eq!(analysis.total_rows, 20);
    assert_eq!(analysis.duplicate_rows, 0);
    assert_eq!(analysis.missing_values["name"], 3);
    assert_eq!(analysis.missing_values["age"], 2);
    assert_eq!(analysis.columns["name"], "text");
    assert_eq!(analysis.columns["age"], "integer");

    let cleaning = DataCleaner::clean(&path).unwrap();
    assert_eq!(cleaning.missing_values_fixed, 5);
    assert_eq!(cleaning.rows_after, 20);
    // One step per column with missing cells, in header order
    assert_eq!(
        cleaning.steps,
        vec![
            "Filled missing values in 'name' with 'Unknown'".to_string(),
            "Filled missing values in 'age' with mean".to_string(),
        ]
    );
    // 5 missing over 20 rows: integer division gives no penalty
    assert_eq!(cleaning.data_quality_score, 100);

    let out = load_csv(&dir.path().join("mixed_missing_20_cleaned.csv"));
    let name = out.column("name").unwrap();
    let age = out.column("age").unwrap();
    assert_eq!(name.null_count(), 0);
    assert_eq!(age.null_count(), 0);

    // Text fills use the literal token (rows 2, 9, 15 were blank)
    assert!(name.get(1).unwrap().to_string().contains("Unknown"));
    assert!(name.get(8).unwrap().to_string().contains("Unknown"));
    assert!(name.get(14).unwrap().to_string().contains("Unknown"));

    // Numeric fills use the column mean: 18 present values 1..=18, mean 9.5
    assert_eq!(age.get(3).unwrap().try_extract::<f64>().unwrap(), 9.5);
    assert_eq!(age.get(11).unwrap().try_extract::<f64>().unwrap(), 9.5);
    // Present values survive (promoted to float)
    assert_eq!(age.get(0).unwrap().try_extract::<f64>().unwrap(), 1.0);
}

// ============================================================================
// Scenario D: quality floor
// ============================================================================

#[test]
fn test_quality_score_is_clamped_at_the_floor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noisy.csv");

    // 100 rows: 10 distinct patterns, one of them repeated 91 times in total
    let mut content = String::from("id,category,value\n");
    for i in 0..10 {
        content.push_str(&format!("{},c{},{}\n", i, i, i * 10));
    }
    for _ in 0..90 {
        content.push_str("0,c0,0\n");
    }
    fs::write(&path, content).unwrap();

    let cleaning = DataCleaner::clean(&path).unwrap();
    assert_eq!(cleaning.rows_before, 100);
    assert_eq!(cleaning.duplicates_removed, 90);
    assert_eq!(cleaning.rows_after, 10);
    // raw = 100 - 90 - 0 = 10, clamped up to 40
    assert_eq!(cleaning.data_quality_score, 40);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_empty_file_yields_neutral_reports_and_no_output() {
    let (dir, path) = stage("empty.csv");

    let analysis = DataAnalyzer::analyze(&path).unwrap();
    assert_eq!(analysis.total_rows, 0);
    assert_eq!(analysis.total_columns, 0);
    assert!(analysis.missing_values.is_empty());
    assert!(analysis.columns.is_empty());

    let cleaning = DataCleaner::clean(&path).unwrap();
    assert!(cleaning.cleaned_file_path.is_none());
    assert!(cleaning.steps.is_empty());
    assert_eq!(cleaning.rows_before, 0);
    assert_eq!(cleaning.rows_after, 0);
    assert_eq!(cleaning.data_quality_score, 0);

    assert!(!dir.path().join("empty_cleaned.csv").exists());
}

#[test]
fn test_cleaning_a_clean_output_is_idempotent() {
    let (dir, path) = stage("duplicates_10.csv");

    let first = DataCleaner::clean(&path).unwrap();
    assert_eq!(first.rows_after, 8);

    // Clean the output of the first pass: nothing left to fix
    let second = DataCleaner::clean(dir.path().join("duplicates_10_cleaned.csv")).unwrap();
    assert_eq!(second.rows_before, 8);
    assert_eq!(second.rows_after, 8);
    assert_eq!(second.duplicates_removed, 0);
    assert_eq!(second.missing_values_fixed, 0);
    assert_eq!(second.data_quality_score, 100);
    assert!(second.steps.is_empty());
}

// ============================================================================
// Cross-Operation Properties
// ============================================================================

#[test]
fn test_analyzer_and_cleaner_agree_on_defect_counts() {
    for fixture in ["clean_10x3.csv", "duplicates_10.csv", "mixed_missing_20.csv"] {
        let (_dir, path) = stage(fixture);

        let analysis = DataAnalyzer::analyze(&path).unwrap();
        let cleaning = DataCleaner::clean(&path).unwrap();

        assert_eq!(
            analysis.duplicate_rows, cleaning.duplicates_removed,
            "duplicate counts diverge for {fixture}"
        );
        assert_eq!(
            analysis.missing_values.values().sum::<usize>(),
            cleaning.missing_values_fixed,
            "missing counts diverge for {fixture}"
        );
        assert_eq!(
            cleaning.rows_after,
            cleaning.rows_before - cleaning.duplicates_removed,
            "row accounting broken for {fixture}"
        );
        assert!(
            (40..=100).contains(&cleaning.data_quality_score),
            "score out of bounds for {fixture}"
        );
    }
}

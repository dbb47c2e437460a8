use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary statistics of a dataset as loaded, before any cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_rows: usize,
    pub total_columns: usize,
    /// Missing-cell count per column.
    pub missing_values: HashMap<String, usize>,
    /// Rows that are an exact repeat of an earlier row, multiplicities
    /// counted (3 identical rows contribute 2).
    pub duplicate_rows: usize,
    /// Inferred primitive type name per column.
    pub columns: HashMap<String, String>,
}

impl AnalysisReport {
    /// The neutral report returned for an empty input.
    pub fn empty() -> Self {
        Self {
            total_rows: 0,
            total_columns: 0,
            missing_values: HashMap::new(),
            duplicate_rows: 0,
            columns: HashMap::new(),
        }
    }
}

/// Outcome of one run of the cleaning pipeline.
///
/// Invariants: `rows_after <= rows_before` and
/// `rows_after == rows_before - duplicates_removed` (imputation never drops
/// rows). `missing_values_fixed` is the missing-cell total of the dataset as
/// loaded, counted before deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Path of the written cleaned copy; `None` when the input was empty.
    pub cleaned_file_path: Option<String>,
    /// Human-readable log of the transformations applied, in order.
    pub steps: Vec<String>,
    pub rows_before: usize,
    pub rows_after: usize,
    pub duplicates_removed: usize,
    pub missing_values_fixed: usize,
    /// Bounded quality score; 0 only for the empty input, otherwise in
    /// [40, 100]. See [`crate::quality::quality_score`].
    pub data_quality_score: i64,
}

impl CleaningReport {
    /// The neutral report returned for an empty input. No file is written.
    pub fn empty() -> Self {
        Self {
            cleaned_file_path: None,
            steps: Vec::new(),
            rows_before: 0,
            rows_after: 0,
            duplicates_removed: 0,
            missing_values_fixed: 0,
            data_quality_score: 0,
        }
    }
}

/// Merged analyze+clean response as assembled for callers.
///
/// `cleaning_steps` and `cleaned_file_path` repeat fields of
/// `cleaning_summary` at the top level; the duplication is part of the
/// response contract consumed by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub analysis: AnalysisReport,
    pub cleaning_summary: CleaningReport,
    pub cleaning_steps: Vec<String>,
    pub cleaned_file_path: Option<String>,
}

impl PipelineReport {
    pub fn new(analysis: AnalysisReport, cleaning: CleaningReport) -> Self {
        let cleaning_steps = cleaning.steps.clone();
        let cleaned_file_path = cleaning.cleaned_file_path.clone();
        Self {
            analysis,
            cleaning_summary: cleaning,
            cleaning_steps,
            cleaned_file_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reports_are_neutral() {
        let analysis = AnalysisReport::empty();
        assert_eq!(analysis.total_rows, 0);
        assert_eq!(analysis.total_columns, 0);
        assert!(analysis.missing_values.is_empty());
        assert!(analysis.columns.is_empty());

        let cleaning = CleaningReport::empty();
        assert!(cleaning.cleaned_file_path.is_none());
        assert!(cleaning.steps.is_empty());
        assert_eq!(cleaning.data_quality_score, 0);
    }

    #[test]
    fn test_pipeline_report_mirrors_cleaning_fields() {
        let mut cleaning = CleaningReport::empty();
        cleaning.cleaned_file_path = Some("out_cleaned.csv".to_string());
        cleaning.steps = vec!["Removed 2 duplicate rows".to_string()];

        let report = PipelineReport::new(AnalysisReport::empty(), cleaning);
        assert_eq!(report.cleaning_steps, report.cleaning_summary.steps);
        assert_eq!(
            report.cleaned_file_path,
            report.cleaning_summary.cleaned_file_path
        );
    }

    #[test]
    fn test_cleaning_report_json_roundtrip() {
        let report = CleaningReport {
            cleaned_file_path: Some("data_cleaned.csv".to_string()),
            steps: vec![
                "Removed 2 duplicate rows".to_string(),
                "Filled missing values in 'age' with mean".to_string(),
            ],
            rows_before: 10,
            rows_after: 8,
            duplicates_removed: 2,
            missing_values_fixed: 3,
            data_quality_score: 98,
        };

        let json = serde_json::to_string(&report).expect("Should serialize");
        let deserialized: CleaningReport =
            serde_json::from_str(&json).expect("Should deserialize");

        assert_eq!(deserialized.rows_before, 10);
        assert_eq!(deserialized.rows_after, 8);
        assert_eq!(deserialized.steps.len(), 2);
        assert_eq!(deserialized.data_quality_score, 98);
    }
}

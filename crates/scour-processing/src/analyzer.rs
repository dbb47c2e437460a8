//! Dataset analysis: shape, missing values, duplicates, and column types.

use std::collections::HashMap;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::types::AnalysisReport;
use crate::utils;

/// Analyzer for summarizing a tabular file without modifying it.
pub struct DataAnalyzer;

impl DataAnalyzer {
    /// Analyze the CSV file at `path`.
    ///
    /// An empty file (zero bytes, nothing parseable) yields the neutral
    /// all-zero report; a malformed file is an error.
    pub fn analyze(path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let path = path.as_ref();
        let Some(df) = utils::load_frame(path)? else {
            debug!("No parseable data in {}, returning empty report", path.display());
            return Ok(AnalysisReport::empty());
        };
        Self::analyze_frame(&df)
    }

    /// Analyze an already-loaded dataframe.
    pub fn analyze_frame(df: &DataFrame) -> Result<AnalysisReport> {
        let mut missing_values = HashMap::new();
        let mut columns = HashMap::new();

        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let name = series.name().to_string();
            missing_values.insert(name.clone(), series.null_count());
            columns.insert(name, utils::dtype_name(series.dtype()));
        }

        let duplicate_rows = utils::duplicate_row_count(df)?;
        debug!(
            "Analyzed frame: {} rows, {} columns, {} duplicates",
            df.height(),
            df.width(),
            duplicate_rows
        );

        Ok(AnalysisReport {
            total_rows: df.height(),
            total_columns: df.width(),
            missing_values,
            duplicate_rows,
            columns,
        })
    }
}

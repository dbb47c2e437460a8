//! Shared helpers for loading, inspecting, and transforming dataframes.

use std::path::{Path, PathBuf};

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;

use crate::error::Result;

/// Load a CSV file with a header row, inferring the schema from the whole
/// file. Returns `Ok(None)` when the file holds no parseable data at all
/// (zero bytes); a missing or malformed file is an error.
pub fn load_frame(path: &Path) -> Result<Option<DataFrame>> {
    let read = CsvReadOptions::default()
        .with_infer_schema_length(None)
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish());

    match read {
        Ok(df) => Ok(Some(df)),
        Err(PolarsError::NoData(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Count rows that are exact repeats of an earlier row. Every occurrence
/// beyond the first of an identical row counts once, so three identical
/// rows contribute two.
pub fn duplicate_row_count(df: &DataFrame) -> Result<usize> {
    let unique = df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?;
    Ok(df.height() - unique.height())
}

/// Total missing cells across all columns.
pub fn total_missing(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|col| col.null_count()).sum()
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Human-readable primitive type name for a column dtype.
pub fn dtype_name(dtype: &DataType) -> String {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => "integer".to_string(),
        DataType::Float32 | DataType::Float64 => "float".to_string(),
        DataType::Boolean => "boolean".to_string(),
        DataType::String | DataType::Categorical(_, _) => "text".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}

/// Fill null cells of a column with a literal token. Non-string columns are
/// rendered to text first, so a boolean column with missing cells becomes a
/// text column holding the token.
pub fn fill_nulls_with_token(series: &Series, token: &str) -> PolarsResult<Series> {
    let cast = series.cast(&DataType::String)?;
    let filled: StringChunked = cast
        .str()?
        .into_iter()
        .map(|value| Some(value.unwrap_or(token).to_string()))
        .collect();

    let mut out = filled.into_series();
    out.rename(series.name().clone());
    Ok(out)
}

/// Fill null cells of a numeric column with a value, promoting the column
/// to Float64.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let cast = series.cast(&DataType::Float64)?;
    let filled: Float64Chunked = cast
        .f64()?
        .into_iter()
        .map(|value| Some(value.unwrap_or(fill_value)))
        .collect();

    let mut out = filled.into_series();
    out.rename(series.name().clone());
    Ok(out)
}

/// Derive the output path for a cleaned copy: the input's stem with a
/// `_cleaned` suffix appended before the extension.
pub fn derived_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_cleaned.{ext}"),
        None => format!("{stem}_cleaned"),
    };
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_dtype_name() {
        assert_eq!(dtype_name(&DataType::Int64), "integer");
        assert_eq!(dtype_name(&DataType::Float32), "float");
        assert_eq!(dtype_name(&DataType::Boolean), "boolean");
        assert_eq!(dtype_name(&DataType::String), "text");
    }

    #[test]
    fn test_duplicate_row_count() {
        let df = df![
            "a" => [1, 1, 1, 2],
            "b" => ["x", "x", "x", "y"],
        ]
        .unwrap();
        // Three identical rows -> two duplicates
        assert_eq!(duplicate_row_count(&df).unwrap(), 2);
    }

    #[test]
    fn test_duplicate_row_count_requires_full_row_match() {
        let df = df![
            "a" => [1, 1],
            "b" => ["x", "y"],
        ]
        .unwrap();
        assert_eq!(duplicate_row_count(&df).unwrap(), 0);
    }

    #[test]
    fn test_total_missing() {
        let df = df![
            "a" => [Some(1), None, Some(3)],
            "b" => [None::<&str>, None, Some("z")],
        ]
        .unwrap();
        assert_eq!(total_missing(&df), 3);
    }

    #[test]
    fn test_fill_nulls_with_token() {
        let series = Series::new("city".into(), &[Some("Oslo"), None, Some("Lima")]);
        let filled = fill_nulls_with_token(&series, "Unknown").unwrap();

        assert_eq!(filled.null_count(), 0);
        assert!(filled.get(1).unwrap().to_string().contains("Unknown"));
        assert!(filled.get(0).unwrap().to_string().contains("Oslo"));
    }

    #[test]
    fn test_fill_numeric_nulls_promotes_to_float() {
        let series = Series::new("age".into(), &[Some(10i64), None, Some(20)]);
        let filled = fill_numeric_nulls(&series, 15.0).unwrap();

        assert!(matches!(filled.dtype(), DataType::Float64));
        assert_eq!(filled.get(1).unwrap().try_extract::<f64>().unwrap(), 15.0);
        assert_eq!(filled.get(2).unwrap().try_extract::<f64>().unwrap(), 20.0);
    }

    #[test]
    fn test_derived_output_path() {
        assert_eq!(
            derived_output_path(Path::new("/tmp/data.csv")),
            PathBuf::from("/tmp/data_cleaned.csv")
        );
        assert_eq!(
            derived_output_path(Path::new("archive.data.csv")),
            PathBuf::from("archive.data_cleaned.csv")
        );
        assert_eq!(
            derived_output_path(Path::new("noext")),
            PathBuf::from("noext_cleaned")
        );
    }

    #[test]
    fn test_load_frame_empty_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "").unwrap();

        assert!(load_frame(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_frame_missing_file_is_error() {
        assert!(load_frame(Path::new("/definitely/not/here.csv")).is_err());
    }
}

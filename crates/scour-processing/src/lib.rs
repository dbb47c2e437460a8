//! CSV Analysis & Cleaning Library
//!
//! This library implements a fixed cleaning pipeline for comma-delimited
//! tabular data, built on Rust and Polars:
//!
//! - **Analysis**: row/column counts, per-column missing-value counts,
//!   duplicate-row count, and per-column inferred primitive types
//! - **Cleaning**: exact-duplicate removal (keep-first), missing-value
//!   imputation (constant token for text columns, arithmetic mean for
//!   numeric columns), and persistence of the cleaned dataset
//! - **Quality Scoring**: a bounded integer score derived from the defect
//!   counts of the input dataset
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scour_processing::{DataAnalyzer, DataCleaner};
//!
//! let analysis = DataAnalyzer::analyze("data.csv")?;
//! println!("{} rows, {} duplicates", analysis.total_rows, analysis.duplicate_rows);
//!
//! let cleaning = DataCleaner::clean("data.csv")?;
//! println!("score: {}", cleaning.data_quality_score);
//! for step in &cleaning.steps {
//!     println!("- {step}");
//! }
//! // cleaned copy written to data_cleaned.csv
//! ```
//!
//! Both operations are pure functions of a file path: the analyzer never
//! mutates its input, and the cleaner's only side effect is writing the
//! cleaned copy next to the input (`x.csv` -> `x_cleaned.csv`). An empty
//! input (zero bytes, no parseable rows) yields a neutral all-zero report
//! from both operations rather than an error; any other malformed input
//! surfaces as a [`ProcessingError`].

pub mod analyzer;
pub mod cleaner;
pub mod error;
pub mod quality;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use analyzer::DataAnalyzer;
pub use cleaner::{DataCleaner, FALLBACK_TOKEN};
pub use error::{ProcessingError, Result};
pub use quality::quality_score;
pub use types::{AnalysisReport, CleaningReport, PipelineReport};

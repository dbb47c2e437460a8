//! Data quality scoring.
//!
//! The score is a bounded integer heuristic over the defect counts of the
//! dataset as loaded: each duplicate row costs one point, and the missing
//! cells cost `missing / rows` points (integer division), so sparse missing
//! data in a large dataset is cheap while widespread gaps are not.

/// Lowest score a non-empty dataset can receive.
pub const SCORE_FLOOR: i64 = 40;

/// Highest score; also the starting point before penalties.
pub const SCORE_CEILING: i64 = 100;

/// Compute the quality score for a cleaned dataset.
///
/// `raw = 100 - duplicates_removed - missing_values_fixed / max(rows_before, 1)`
/// with integer division, then clamped to `[40, 100]`; the floor is applied
/// before the ceiling, i.e. `min(max(40, raw), 100)`.
pub fn quality_score(
    duplicates_removed: usize,
    missing_values_fixed: usize,
    rows_before: usize,
) -> i64 {
    let missing_penalty = (missing_values_fixed / rows_before.max(1)) as i64;
    let raw = SCORE_CEILING - duplicates_removed as i64 - missing_penalty;
    raw.max(SCORE_FLOOR).min(SCORE_CEILING)
}

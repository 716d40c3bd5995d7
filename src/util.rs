/// General utilities for safe numeric conversion.
///
/// Index and count arguments arrive as `i64` values and must be converted
/// to `usize` without silent wrap-around; these helpers centralize the
/// checks.
pub mod num;

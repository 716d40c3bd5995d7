use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an integer index or count argument to `usize`.
///
/// A negative value can never address a container, so it reports
/// `index out of range` directly instead of wrapping.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfRange { line }` for negative values
/// (and for values beyond the address space on 32-bit targets).
///
/// ## Example
/// ```
/// use ega::{error::RuntimeError, util::num::int_to_index};
///
/// assert_eq!(int_to_index(3, 1).unwrap(), 3);
///
/// let err = int_to_index(-1, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::IndexOutOfRange { line: 5 }));
/// ```
pub fn int_to_index(value: i64, line: usize) -> EvalResult<usize> {
    usize::try_from(value).map_err(|_| RuntimeError::IndexOutOfRange { line })
}

/// Converts a container length or position to the language's integer type.
///
/// ## Errors
/// Returns `RuntimeError::IllegalOperation { line }` when the length does
/// not fit an `i64`, which cannot happen for real containers but keeps the
/// conversion total.
pub fn len_to_int(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::IllegalOperation { line })
}

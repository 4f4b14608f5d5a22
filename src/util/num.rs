use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use evalenv::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `i64` exponent to `u32` for `checked_pow`.
///
/// ## Errors
/// `Overflow` for exponents that do not fit in a `u32`, including negative
/// ones (callers handle negative exponents before reaching this).
pub fn i64_to_u32_checked(value: i64, position: usize) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { position })
}

/// Converts an array index to `usize`, bounds-checking against `len`.
///
/// ## Errors
/// `IndexOutOfBounds` if the index is negative or not below `len`.
///
/// ## Example
/// ```
/// use evalenv::{error::RuntimeError, util::num::checked_index};
///
/// assert_eq!(checked_index(2, 3, 0).unwrap(), 2);
/// assert!(matches!(checked_index(-1, 3, 0),
///                  Err(RuntimeError::IndexOutOfBounds { found: -1, .. })));
/// ```
pub fn checked_index(index: i64, len: usize, position: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|i| *i < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { len,
                                                                  found: index,
                                                                  position })
}

/// Converts a `usize` length to `i64`.
///
/// ## Errors
/// `Overflow` if the length does not fit in an `i64`.
pub fn usize_to_i64_checked(value: usize, position: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { position })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_past_end_is_rejected() {
        assert!(matches!(checked_index(3, 3, 7),
                         Err(RuntimeError::IndexOutOfBounds { len: 3, found: 3, position: 7 })));
    }

    #[test]
    fn negative_exponent_does_not_fit_u32() {
        assert!(i64_to_u32_checked(-1, 0).is_err());
        assert_eq!(i64_to_u32_checked(10, 0).unwrap(), 10);
    }
}

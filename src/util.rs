/// Numeric conversion helpers.
///
/// Safe conversions between `i64`, `u32`, `usize` and `f64` that refuse to
/// lose data silently. Every function returns a `Result` which is `Ok` only if
/// the conversion is exact.
pub mod num;

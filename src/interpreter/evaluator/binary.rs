/// Entry point for binary operations.
///
/// Routes an operator to the arithmetic, comparison or logic handlers.
pub mod core;

/// Scalar arithmetic and string concatenation.
pub mod scalar;

/// Elementwise arithmetic over arrays.
pub mod array;

/// Equality and ordering comparisons.
pub mod comparison;

/// Logical `and`, `or` and `xor`.
pub mod logic;

/// Exponentiation.
pub mod power;

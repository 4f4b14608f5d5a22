/// Built-in function implementations.
///
/// Contains the elementary functions, rounding, complex-part accessors and
/// `len`.
pub mod builtin;
/// The `conj` (complex conjugate) function implementation.
///
/// Computes the complex conjugate of a number.
pub mod conj;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
/// The `sqrt` (square root) function implementation.
///
/// Computes the square root for real, integer, or complex values.
pub mod sqrt;

pub mod core;

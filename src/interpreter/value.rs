/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts. Includes implementations for basic arithmetic operations, absolute
/// value, and the elementary functions the engine exposes as builtins.
pub mod complex;
/// One-row array storage.
///
/// Defines `NativeArray`, the engine's only container, together with the
/// `ArrayKind` tag that marks an array as an encoded key/value map.
pub mod array;

pub mod core;

use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use a name that is not bound in the constant table.
    #[error("Error at position {position}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the reference.
        position: usize,
    },
    /// Called an unknown function.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset of the call.
        position: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at position {position}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Byte offset of the operation.
        position: usize,
    },
    /// A boolean value was expected, but not found.
    #[error("Error at position {position}: Expected boolean.")]
    ExpectedBoolean {
        /// Byte offset of the operation.
        position: usize,
    },
    /// A numeric value was expected, but not found.
    #[error("Error at position {position}: Expected number.")]
    ExpectedNumber {
        /// Byte offset of the operation.
        position: usize,
    },
    /// An array value was expected, but not found.
    #[error("Error at position {position}: Expected array.")]
    ExpectedArray {
        /// Byte offset of the operation.
        position: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error at position {position}: Function '{name}' expects {expected} argument(s), found {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of arguments the function accepts.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error at position {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Byte offset of the operation.
        position: usize,
    },
    /// Tried to access an array element outside the allowed bounds.
    #[error("Error at position {position}: Index out of bounds. Length is {len}, but found {found} instead.")]
    IndexOutOfBounds {
        /// The number of elements in the array.
        len:      usize,
        /// The index that was actually requested.
        found:    i64,
        /// Byte offset of the indexing expression.
        position: usize,
    },
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the operation.
        position: usize,
    },
    /// An integer was too large to be represented exactly as a real.
    #[error("Error at position {position}: Literal is too large.")]
    LiteralTooLarge {
        /// Byte offset of the operation.
        position: usize,
    },
    /// Tried to use a real number where an integer was required.
    #[error("Error at position {position}: Value is fractional and cannot be safely converted to an integer.")]
    RealIsFractional {
        /// Byte offset of the operation.
        position: usize,
    },
    /// Evaluation was requested before any expression was set.
    #[error("No expression has been set.")]
    NoExpression,
}

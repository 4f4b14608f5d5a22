/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// expression text. Parse errors include syntax mistakes, unexpected tokens,
/// unterminated strings and literals that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the engine evaluates a
/// parsed expression: unknown names, type mismatches, division by zero and
/// failed numeric conversions.
pub mod runtime_error;
/// Environment-level errors.
///
/// The error type returned by the public evaluation API. It classifies every
/// failure as a syntax, conversion or evaluation problem and keeps the trail
/// of enclosing expressions a failure travelled through.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure reported by the expression engine.
///
/// Setting an expression can only fail with a [`ParseError`]; evaluating it can
/// only fail with a [`RuntimeError`]. The environment flattens both into
/// [`EvalError::Evaluation`] using the engine's own diagnostic text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The expression text could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed expression failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

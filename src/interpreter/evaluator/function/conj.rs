use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::single_arg},
        value::core::Value,
    },
};
/// Returns the complex conjugate of a numeric value.
///
/// Accepts exactly one argument.
/// - Complex numbers return their conjugate.
/// - Real and integer values are returned unchanged.
///
/// Non-numeric arguments yield an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use evalenv::interpreter::{
///     evaluator::function::conj::conj,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// let z = Value::Complex(ComplexNumber::new(3.0, -4.0));
/// let r = conj(&[z], 0).unwrap();
///
/// assert_eq!(r, Value::Complex(ComplexNumber::new(3.0, 4.0)));
/// ```
pub fn conj(args: &[Value], position: usize) -> EvalResult<Value> {
    match single_arg("conj", args, position)? {
        Value::Complex(c) => Ok(Value::Complex(c.conj())),
        value @ (Value::Real(_) | Value::Integer(_)) => Ok(value.clone()),
        _ => Err(RuntimeError::ExpectedNumber { position }),
    }
}

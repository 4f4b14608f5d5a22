use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::single_arg},
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Computes square roots for numeric values.
///
/// - Nonnegative integers and reals return a real square root.
/// - Negative integers and reals return a purely imaginary complex result.
/// - Complex values use their principal complex square root.
///
/// Non-numeric inputs produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use evalenv::interpreter::{
///     evaluator::function::sqrt::sqrt,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// assert_eq!(sqrt(&[Value::Real(9.0)], 0).unwrap(), Value::Real(3.0));
/// assert_eq!(sqrt(&[Value::Integer(-4)], 0).unwrap(),
///            Value::Complex(ComplexNumber::new(0.0, 2.0)));
/// ```
pub fn sqrt(args: &[Value], position: usize) -> EvalResult<Value> {
    let value = single_arg("sqrt", args, position)?;
    match value {
        Value::Integer(_) | Value::Real(_) => {
            let x = value.as_real(position)?;
            if x >= 0.0 {
                Ok(Value::Real(x.sqrt()))
            } else {
                Ok(Value::Complex(ComplexNumber::new(0.0, (-x).sqrt())))
            }
        },
        Value::Complex(c) => Ok(Value::Complex(c.sqrt())),
        _ => Err(RuntimeError::ExpectedNumber { position }),
    }
}

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Computes the minimum or maximum of one or more numeric values.
///
/// - If every argument is an integer, the result is an integer.
/// - Otherwise all arguments are promoted to real and the result is real.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Any non-real argument (including complex) produces an
/// `ExpectedNumber` error.
///
/// # Example
/// ```
/// use evalenv::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::Integer(3), Value::Integer(7), Value::Integer(-1)], 0).unwrap();
/// assert_eq!(r, Value::Integer(-1));
///
/// let r = min_max("max", &[Value::Real(2.5), Value::Integer(1)], 0).unwrap();
/// assert_eq!(r, Value::Real(2.5));
/// ```
pub fn min_max(name: &str, args: &[Value], position: usize) -> EvalResult<Value> {
    let take_min = match name {
        "min" => true,
        "max" => false,
        _ => {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       position });
        },
    };

    if args.is_empty() {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                         expected: 1,
                                                         found: 0,
                                                         position });
    }

    if let Some(integers) = args.iter()
                                .map(|v| match v {
                                    Value::Integer(n) => Some(*n),
                                    _ => None,
                                })
                                .collect::<Option<Vec<_>>>()
    {
        let result = if take_min {
            integers.iter().min()
        } else {
            integers.iter().max()
        };
        return result.copied()
                     .map(Value::Integer)
                     .ok_or(RuntimeError::ExpectedNumber { position });
    }

    let reals = args.iter()
                    .map(|v| match v {
                        Value::Integer(_) | Value::Real(_) => v.as_real(position),
                        _ => Err(RuntimeError::ExpectedNumber { position }),
                    })
                    .collect::<EvalResult<Vec<_>>>()?;

    let result = reals.into_iter()
                      .reduce(|a, b| if take_min { a.min(b) } else { a.max(b) })
                      .ok_or(RuntimeError::ExpectedNumber { position })?;

    Ok(Value::Real(result))
}

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::core::Value,
    },
};

impl Engine {
    /// Applies an elementwise binary operation to one or two values.
    ///
    /// This function unifies all array binary evaluation paths:
    /// - Array with array
    /// - Array with scalar
    /// - Scalar with array
    /// - Scalar with scalar
    ///
    /// Nested arrays are handled recursively. Lengths must match when both
    /// sides are arrays at the same level. The elementwise scalar operation is
    /// supplied via `f`. Results are always plain sequences, whatever the kind
    /// of the inputs.
    ///
    /// # Example
    /// ```
    /// use evalenv::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Engine, value::core::Value},
    /// };
    ///
    /// let left = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    /// let right = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
    ///
    /// let r = Engine::map_array_binary(BinaryOperator::Add, &left, &right, 0, &|l, r| {
    ///             Engine::eval_scalar_op(BinaryOperator::Add, l, r, 0)
    ///         }).unwrap();
    ///
    /// assert_eq!(r, Value::from(vec![Value::Integer(11), Value::Integer(22)]));
    /// ```
    pub fn map_array_binary<F>(op: BinaryOperator,
                               left: &Value,
                               right: &Value,
                               position: usize,
                               f: &F)
                               -> EvalResult<Value>
        where F: Fn(&Value, &Value) -> EvalResult<Value>
    {
        match (left, right) {
            (Value::Array(larr), Value::Array(rarr)) => {
                if larr.len() != rarr.len() {
                    return Err(RuntimeError::TypeError { details: format!("cannot apply {op} to arrays of different lengths: {} vs {}",
                                                                          larr.len(),
                                                                          rarr.len()),
                                                         position });
                }

                larr.iter()
                    .zip(rarr.iter())
                    .map(|(l, r)| Self::map_array_binary(op, l, r, position, f))
                    .collect::<EvalResult<Vec<_>>>()
                    .map(Value::from)
            },

            (Value::Array(arr), scalar) => {
                arr.iter()
                   .map(|l| Self::map_array_binary(op, l, scalar, position, f))
                   .collect::<EvalResult<Vec<_>>>()
                   .map(Value::from)
            },

            (scalar, Value::Array(arr)) => {
                arr.iter()
                   .map(|r| Self::map_array_binary(op, scalar, r, position, f))
                   .collect::<EvalResult<Vec<_>>>()
                   .map(Value::from)
            },

            (l, r) => f(l, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{EngineError, RuntimeError},
        interpreter::{evaluator::core::Engine, value::core::Value},
    };

    #[test]
    fn nested_arrays_are_mapped_recursively() {
        let value = Engine::new().evaluate("[[1, 2], [3]] * 2").unwrap();
        assert_eq!(value,
                   Value::from(vec![Value::from(vec![Value::Integer(2), Value::Integer(4)]),
                                    Value::from(vec![Value::Integer(6)])]));
    }

    #[test]
    fn length_mismatch_is_a_type_error() {
        assert!(matches!(Engine::new().evaluate("[1, 2] + [1]"),
                         Err(EngineError::Runtime(RuntimeError::TypeError { .. }))));
    }
}

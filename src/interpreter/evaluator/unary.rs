use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::core::Value,
    },
};

impl Engine {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers, reals and complex numbers,
    ///   applied elementwise to arrays. Negating `i64::MIN` overflows.
    /// - `Not`: boolean negation.
    ///
    /// # Example
    /// ```
    /// use evalenv::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Engine, value::core::Value},
    /// };
    ///
    /// let v = Engine::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 0).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Engine::eval_unary(UnaryOperator::Not, &Value::Bool(false), 0).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => {
                    n.checked_neg()
                     .map(Value::Integer)
                     .ok_or(RuntimeError::Overflow { position })
                },
                Value::Real(r) => Ok(Value::Real(-r)),
                Value::Complex(c) => Ok(Value::Complex(-*c)),
                Value::Array(arr) => {
                    arr.iter()
                       .map(|v| Self::eval_unary(op, v, position))
                       .collect::<EvalResult<Vec<_>>>()
                       .map(Value::from)
                },
                _ => Err(RuntimeError::ExpectedNumber { position }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(position)?)),
        }
    }
}

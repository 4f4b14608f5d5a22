use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::core::Value,
    },
};

impl Engine {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands must be booleans; anything else is an `ExpectedBoolean`
    /// error. Supported operators are logical AND, XOR and OR.
    ///
    /// # Example
    /// ```
    /// use evalenv::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Engine, value::core::Value},
    /// };
    ///
    /// let result = Engine::eval_logic(BinaryOperator::Xor, &Value::Bool(true), &Value::Bool(false), 0);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: usize)
                      -> EvalResult<Value> {
        use BinaryOperator::{And, Or, Xor};

        let (l, r) = (left.as_bool(position)?, right.as_bool(position)?);
        match op {
            And => Ok(Value::Bool(l && r)),
            Xor => Ok(Value::Bool(l ^ r)),
            Or => Ok(Value::Bool(l || r)),
            _ => Err(RuntimeError::TypeError { details: format!("{op} is not a logical operator"),
                                               position }),
        }
    }
}

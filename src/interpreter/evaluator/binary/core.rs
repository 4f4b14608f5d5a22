use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::core::Value,
    },
};

impl Engine {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators apply elementwise when either operand is an array
    /// and otherwise go to the scalar handlers: `+ - * /` to
    /// `eval_scalar_op`, `%` to `eval_mod` and `^` to `eval_pow`.
    /// Relational and equality operators use `eval_comparison`.
    /// Logical operators call `eval_logic`.
    ///
    /// # Example
    /// ```
    /// use evalenv::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Engine, value::core::Value},
    /// };
    ///
    /// let result = Engine::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), 0);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let left = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    /// let result = Engine::eval_binary(BinaryOperator::Mul, &left, &Value::Integer(3), 0);
    /// assert_eq!(result.unwrap(),
    ///            Value::from(vec![Value::Integer(3), Value::Integer(6)]));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub, Xor,
        };

        match op {
            Add | Sub | Mul | Div | Mod | Pow => match (left, right) {
                (Value::Array(_), _) | (_, Value::Array(_)) => {
                    Self::map_array_binary(op, left, right, position, &|l, r| {
                        Self::eval_arithmetic(op, l, r, position)
                    })
                },
                _ => Self::eval_arithmetic(op, left, right, position),
            },

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, position)
            },

            And | Xor | Or => Self::eval_logic(op, left, right, position),
        }
    }

    /// Applies an arithmetic operator to two non-array operands.
    fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: usize)
                       -> EvalResult<Value> {
        match op {
            BinaryOperator::Pow => Self::eval_pow(left, right, position),
            BinaryOperator::Mod => Self::eval_mod(left, right, position),
            _ => Self::eval_scalar_op(op, left, right, position),
        }
    }
}

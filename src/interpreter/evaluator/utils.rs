use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::core::Value,
    },
    util::num::checked_index,
};

impl Engine {
    /// Evaluates a literal.
    ///
    /// # Example
    /// ```
    /// use evalenv::{
    ///     ast::LiteralValue,
    ///     interpreter::{evaluator::core::Engine, value::core::Value},
    /// };
    ///
    /// let value = Engine::eval_literal(&LiteralValue::Integer(7));
    /// assert_eq!(value, Value::Integer(7));
    /// ```
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        Value::from(value)
    }

    /// Looks up a constant by name.
    ///
    /// Returns an `UnknownVariable` error if the name is not bound.
    pub fn eval_variable(&self, name: &str, position: usize) -> EvalResult<Value> {
        self.constant(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           position })
    }

    /// Evaluates the operand, then applies the unary operator.
    pub fn eval_unary_op(&self,
                         op: UnaryOperator,
                         expr: &Expr,
                         position: usize)
                         -> EvalResult<Value> {
        let value = self.eval_expr(expr)?;
        Self::eval_unary(op, &value, position)
    }

    /// Evaluates both operands left to right, then applies the operator.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          position: usize)
                          -> EvalResult<Value> {
        let lval = self.eval_expr(left)?;
        let rval = self.eval_expr(right)?;

        Self::eval_binary(op, &lval, &rval, position)
    }

    /// Evaluates every argument, then dispatches to the named function.
    pub fn eval_function_call(&self,
                              name: &str,
                              arguments: &[Expr],
                              position: usize)
                              -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|expr| self.eval_expr(expr))
                            .collect::<EvalResult<Vec<_>>>()?;

        Self::eval_function(name, &args, position)
    }

    /// Evaluates an array literal into a one-row sequence.
    pub fn eval_array_literal(&self, elements: &[Expr]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|expr| self.eval_expr(expr))
                             .collect::<EvalResult<Vec<_>>>()?;

        Ok(Value::Array(values.into()))
    }

    /// Evaluates `array[index]`.
    ///
    /// Indices are zero-based integers. Strings can be indexed too and yield
    /// one-character strings.
    pub fn eval_array_index(&self,
                            array: &Expr,
                            index: &Expr,
                            position: usize)
                            -> EvalResult<Value> {
        let array_value = self.eval_expr(array)?;
        let index_value = self.eval_expr(index)?;

        let Value::Integer(index) = index_value else {
            return Err(RuntimeError::TypeError { details:  format!("array index must be an integer, found {}",
                                                                   index_value.type_name()),
                                                 position });
        };

        match &array_value {
            Value::Array(arr) => {
                let index = checked_index(index, arr.len(), position)?;
                Ok(arr[index].clone())
            },
            Value::Str(s) => {
                let len = s.chars().count();
                let index = checked_index(index, len, position)?;
                Ok(s.chars()
                    .nth(index)
                    .map_or_else(String::new, String::from)
                    .into())
            },
            other => Err(RuntimeError::TypeError { details: format!("cannot index a value of type {}",
                                                                    other.type_name()),
                                                   position }),
        }
    }
}

/// Checks structural equality between two values, performing minimal
/// promotion.
///
/// Rules:
/// - If both operands are numeric and either is complex, both are promoted to
///   complex and compared.
/// - Else if both are numeric and either is real, both are promoted to real
///   and compared.
/// - Arrays are equal if they have the same length and pairwise equal cells.
/// - Otherwise values are compared directly; values of different kinds are
///   never equal.
///
/// # Example
/// ```
/// use evalenv::interpreter::{evaluator::utils::strict_eq, value::core::Value};
///
/// let a = Value::Real(2.0);
/// let b = Value::Integer(2);
///
/// assert!(strict_eq(&a, &b, 0).unwrap());
/// assert!(!strict_eq(&a, &Value::from("2"), 0).unwrap());
/// ```
pub fn strict_eq(left: &Value, right: &Value, position: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Array(l), Value::Array(r)) => {
            if l.len() != r.len() {
                return Ok(false);
            }
            for (a, b) in l.iter().zip(r.iter()) {
                if !strict_eq(a, b, position)? {
                    return Ok(false);
                }
            }
            Ok(true)
        },

        (l, r) if l.is_numeric() && r.is_numeric() => match (l, r) {
            (Value::Integer(a), Value::Integer(b)) => Ok(a == b),
            (Value::Complex(_), _) | (_, Value::Complex(_)) => {
                Ok(l.as_complex(position)? == r.as_complex(position)?)
            },
            _ => Ok(l.as_real(position)? == r.as_real(position)?),
        },

        _ => Ok(left == right),
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{evaluator::core::Engine, value::core::Value};

    fn eval(source: &str) -> Value {
        Engine::new().evaluate(source).unwrap()
    }

    #[test]
    fn array_literal_and_index() {
        assert_eq!(eval("[10, 20, 30][1]"), Value::Integer(20));
    }

    #[test]
    fn string_index_yields_character() {
        assert_eq!(eval("\"abc\"[2]"), Value::from("c"));
    }

    #[test]
    fn out_of_bounds_index_is_an_error() {
        assert!(Engine::new().evaluate("[1][1]").is_err());
        assert!(Engine::new().evaluate("[1][-1]").is_err());
    }

    #[test]
    fn arrays_compare_structurally() {
        assert_eq!(eval("[1, 2.0] == [1.0, 2]"), Value::Bool(true));
        assert_eq!(eval("[1, 2] == [1, 2, 3]"), Value::Bool(false));
    }
}

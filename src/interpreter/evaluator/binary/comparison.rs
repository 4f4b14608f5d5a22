use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Engine, EvalResult},
            utils::strict_eq,
        },
        value::core::Value,
    },
};

impl Engine {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `Equal` and `NotEqual`, values of any kind are compared using
    /// structural equality with numeric promotion. The ordering operators
    /// accept two real-valued numbers (integers and reals are promoted to
    /// real) or two strings (compared lexicographically).
    ///
    /// # Example
    /// ```
    /// use evalenv::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Engine, value::core::Value},
    /// };
    ///
    /// let result = Engine::eval_comparison(BinaryOperator::Less, &Value::Real(3.0), &Value::Integer(5), 0);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Engine::eval_comparison(BinaryOperator::Equal, &Value::from("a"), &Value::Integer(1), 0);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if matches!(op, Equal | NotEqual) {
            let equal = strict_eq(left, right, position)?;
            return Ok(Value::Bool(if op == Equal { equal } else { !equal }));
        }

        let ordering = match (left, right) {
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
                left.as_real(position)?.partial_cmp(&right.as_real(position)?)
            },
            _ => {
                return Err(RuntimeError::TypeError { details: format!("cannot order {} and {}",
                                                                      left.type_name(),
                                                                      right.type_name()),
                                                     position });
            },
        };

        // NaN compares false with everything.
        let Some(ordering) = ordering else {
            return Ok(Value::Bool(false));
        };

        Ok(Value::Bool(match op {
                           Less => ordering == Ordering::Less,
                           Greater => ordering == Ordering::Greater,
                           LessEqual => ordering != Ordering::Greater,
                           GreaterEqual => ordering != Ordering::Less,
                           _ => {
                               return Err(RuntimeError::TypeError { details: format!("{op} is not a comparison"),
                                                                    position });
                           },
                       }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::complex::ComplexNumber;

    #[test]
    fn complex_values_cannot_be_ordered() {
        let c = Value::Complex(ComplexNumber::new(1.0, 1.0));
        assert!(Engine::eval_comparison(BinaryOperator::Less, &c, &c, 0).is_err());
        assert_eq!(Engine::eval_comparison(BinaryOperator::Equal, &c, &c, 0).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn strings_order_lexicographically() {
        assert_eq!(Engine::eval_comparison(BinaryOperator::Less,
                                           &Value::from("abc"),
                                           &Value::from("abd"),
                                           0).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Value::Real(f64::NAN);
        assert_eq!(Engine::eval_comparison(BinaryOperator::GreaterEqual, &nan, &Value::Real(0.0), 0)
                   .unwrap(),
                   Value::Bool(false));
    }
}

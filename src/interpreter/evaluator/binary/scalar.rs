use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::{complex::ZERO, core::Value},
    },
};

/// Builds the error for an operator that does not apply to the operand kinds.
fn invalid_operands(op: BinaryOperator, left: &Value, right: &Value, position: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply {op} to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              position }
}

impl Engine {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// The function handles integer, real and complex operands. Mixed types are
    /// promoted as needed: integer with real gives real, anything with complex
    /// gives complex. Integer addition, subtraction and multiplication are
    /// checked and report `Overflow`. Division always produces a real (or
    /// complex) result and checks for a zero divisor. Two strings may be added,
    /// which concatenates them.
    ///
    /// The operator must be one of `Add`, `Sub`, `Mul` or `Div`.
    ///
    /// # Example
    /// ```
    /// use evalenv::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Engine, value::core::Value},
    /// };
    ///
    /// let result = Engine::eval_scalar_op(BinaryOperator::Mul, &Value::Real(1.5), &Value::Real(2.0), 0);
    /// assert_eq!(result.unwrap(), Value::Real(3.0));
    ///
    /// let result = Engine::eval_scalar_op(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), 0);
    /// assert_eq!(result.unwrap(), Value::Real(3.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Complex, Integer, Real, Str};

        match (left, right) {
            (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),

            (l, r) if !l.is_numeric() || !r.is_numeric() => {
                Err(invalid_operands(op, left, right, position))
            },

            (Complex(_), _) | (_, Complex(_)) => {
                let l = left.as_complex(position)?;
                let r = right.as_complex(position)?;

                Ok(Complex(match op {
                               Add => l + r,
                               Sub => l - r,
                               Mul => l * r,
                               Div => {
                                   if r == ZERO {
                                       return Err(RuntimeError::DivisionByZero { position });
                                   }
                                   l / r
                               },
                               _ => return Err(invalid_operands(op, left, right, position)),
                           }))
            },

            (Integer(a), Integer(b)) if op != Div => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    _ => return Err(invalid_operands(op, left, right, position)),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { position })
            },

            _ => {
                let l = left.as_real(position)?;
                let r = right.as_real(position)?;

                Ok(Real(match op {
                            Add => l + r,
                            Sub => l - r,
                            Mul => l * r,
                            Div => {
                                if r == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { position });
                                }
                                l / r
                            },
                            _ => return Err(invalid_operands(op, left, right, position)),
                        }))
            },
        }
    }

    /// Evaluates the remainder `left % right`.
    ///
    /// Integers stay integers; an integer mixed with a real is promoted to
    /// real. The result has the sign of the dividend. A zero divisor is an
    /// error. Complex operands are rejected.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::{evaluator::core::Engine, value::core::Value};
    ///
    /// assert_eq!(Engine::eval_mod(&Value::Integer(-7), &Value::Integer(3), 0).unwrap(),
    ///            Value::Integer(-1));
    /// assert_eq!(Engine::eval_mod(&Value::Real(5.5), &Value::Integer(2), 0).unwrap(),
    ///            Value::Real(1.5));
    /// ```
    pub fn eval_mod(left: &Value, right: &Value, position: usize) -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(_), Integer(0)) => Err(RuntimeError::DivisionByZero { position }),
            (Integer(a), Integer(b)) => {
                a.checked_rem(*b)
                 .map(Integer)
                 .ok_or(RuntimeError::Overflow { position })
            },
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                let r = right.as_real(position)?;
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(Real(left.as_real(position)? % r))
            },
            _ => Err(invalid_operands(BinaryOperator::Mod, left, right, position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::complex::ComplexNumber;

    #[test]
    fn integer_overflow_is_reported() {
        let result = Engine::eval_scalar_op(BinaryOperator::Add,
                                            &Value::Integer(i64::MAX),
                                            &Value::Integer(1),
                                            4);
        assert_eq!(result, Err(RuntimeError::Overflow { position: 4 }));
    }

    #[test]
    fn mixed_real_and_complex_promotes_to_complex() {
        let result = Engine::eval_scalar_op(BinaryOperator::Add,
                                            &Value::Real(1.0),
                                            &Value::Complex(ComplexNumber::new(0.0, 2.0)),
                                            0);
        assert_eq!(result.unwrap(), Value::Complex(ComplexNumber::new(1.0, 2.0)));
    }

    #[test]
    fn division_by_zero_is_reported() {
        for (l, r) in [(Value::Integer(1), Value::Integer(0)),
                       (Value::Real(1.0), Value::Real(0.0)),
                       (Value::Complex(ComplexNumber::new(1.0, 1.0)), Value::Integer(0))]
        {
            assert_eq!(Engine::eval_scalar_op(BinaryOperator::Div, &l, &r, 0),
                       Err(RuntimeError::DivisionByZero { position: 0 }));
        }
    }

    #[test]
    fn strings_only_concatenate() {
        assert_eq!(Engine::eval_scalar_op(BinaryOperator::Add,
                                          &Value::from("foo"),
                                          &Value::from("bar"),
                                          0).unwrap(),
                   Value::from("foobar"));
        assert!(matches!(Engine::eval_scalar_op(BinaryOperator::Sub,
                                                &Value::from("foo"),
                                                &Value::from("bar"),
                                                0),
                         Err(RuntimeError::TypeError { .. })));
        assert!(matches!(Engine::eval_scalar_op(BinaryOperator::Add,
                                                &Value::from("foo"),
                                                &Value::Integer(1),
                                                0),
                         Err(RuntimeError::TypeError { .. })));
    }
}

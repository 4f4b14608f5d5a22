use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Engine {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation uses checked arithmetic. Negative integer
    /// exponents are computed in floating-point form. Complex bases support
    /// integer, real and complex exponents. A negative real base with a
    /// fractional exponent has no real result and is computed as a complex
    /// power. In all other cases, operands are promoted to real numbers and
    /// evaluated with `powf`.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::{evaluator::core::Engine, value::core::Value};
    ///
    /// let result = Engine::eval_pow(&Value::Integer(2), &Value::Integer(10), 0).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Engine::eval_pow(&Value::Integer(2), &Value::Integer(-1), 0).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, position: usize) -> EvalResult<Value> {
        use Value::{Complex, Integer, Real};

        match (base, exponent) {
            (Integer(b), Integer(e)) => {
                if *e < 0 {
                    Ok(Real(base.as_real(position)?.powf(exponent.as_real(position)?)))
                } else {
                    b.checked_pow(i64_to_u32_checked(*e, position)?)
                     .map(Integer)
                     .ok_or(RuntimeError::Overflow { position })
                }
            },
            (Complex(b), Integer(e)) => b.checked_powi(*e, position),
            (Complex(b), Real(e)) => Ok(Complex(b.powf(*e))),
            (Complex(_), _) | (_, Complex(_)) => {
                let b = base.as_complex(position)?;
                let e = exponent.as_complex(position)?;
                Ok(Complex(b.powc(e)))
            },
            _ => {
                let b = base.as_real(position)?;
                let e = exponent.as_real(position)?;
                if b < 0.0 && e.fract() != 0.0 {
                    return Ok(Complex(base.as_complex(position)?.powf(e)));
                }
                Ok(Real(b.powf(e)))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::complex::ComplexNumber;

    #[test]
    fn integer_power_overflow_is_reported() {
        assert_eq!(Engine::eval_pow(&Value::Integer(10), &Value::Integer(40), 1),
                   Err(RuntimeError::Overflow { position: 1 }));
    }

    #[test]
    fn negative_base_with_fractional_exponent_is_complex() {
        let Value::Complex(c) = Engine::eval_pow(&Value::Integer(-4), &Value::Real(0.5), 0).unwrap()
        else {
            panic!("expected a complex result");
        };
        assert!(c.real.abs() < 1e-12);
        assert!((c.imaginary - 2.0).abs() < 1e-12);
    }

    #[test]
    fn imaginary_unit_squared() {
        let j = Value::Complex(ComplexNumber::new(0.0, 1.0));
        assert_eq!(Engine::eval_pow(&j, &Value::Integer(2), 0).unwrap(),
                   Value::Complex(ComplexNumber::new(-1.0, 0.0)));
    }

    #[test]
    fn strings_are_rejected() {
        assert!(Engine::eval_pow(&Value::from("a"), &Value::Integer(2), 0).is_err());
    }
}

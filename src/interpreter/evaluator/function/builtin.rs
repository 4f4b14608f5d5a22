use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::single_arg},
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::usize_to_i64_checked,
};

/// Applies a unary builtin function to a numeric value.
///
/// The generated functions accept exactly one argument.
/// - Integers are converted to real numbers before applying the real function.
/// - Reals use the corresponding real builtin.
/// - Complex values use the complex variant.
///
/// Non-numeric arguments produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use evalenv::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], 0).unwrap();
///
/// assert_eq!(r, Value::Real(1.0));
/// ```
macro_rules! real_complex_builtin {
    ($fname:ident, $real_fn:ident, $complex_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "(x)` for real and complex `x`.")]
        pub fn $fname(args: &[Value], position: usize) -> EvalResult<Value> {
            match single_arg(stringify!($fname), args, position)? {
                value @ Value::Integer(_) => Ok(Value::Real(value.as_real(position)?.$real_fn())),
                Value::Real(r) => Ok(Value::Real(r.$real_fn())),
                Value::Complex(c) => Ok(Value::Complex(ComplexNumber::$complex_fn(*c))),
                _ => Err(RuntimeError::ExpectedNumber { position }),
            }
        }
    };
}

real_complex_builtin!(sin, sin, sin);
real_complex_builtin!(cos, cos, cos);
real_complex_builtin!(tan, tan, tan);
real_complex_builtin!(exp, exp, exp);
real_complex_builtin!(sinh, sinh, sinh);
real_complex_builtin!(cosh, cosh, cosh);
real_complex_builtin!(tanh, tanh, tanh);

/// Natural logarithm.
///
/// Negative reals have no real logarithm; their principal complex logarithm
/// is returned instead.
///
/// # Example
/// ```
/// use evalenv::interpreter::{evaluator::function::builtin::ln, value::core::Value};
///
/// assert_eq!(ln(&[Value::Integer(1)], 0).unwrap(), Value::Real(0.0));
/// assert!(matches!(ln(&[Value::Integer(-1)], 0).unwrap(), Value::Complex(_)));
/// ```
pub fn ln(args: &[Value], position: usize) -> EvalResult<Value> {
    let value = single_arg("ln", args, position)?;
    match value {
        Value::Integer(_) | Value::Real(_) => {
            let x = value.as_real(position)?;
            if x < 0.0 {
                Ok(Value::Complex(ComplexNumber::from(x).ln()))
            } else {
                Ok(Value::Real(x.ln()))
            }
        },
        Value::Complex(c) => Ok(Value::Complex(c.ln())),
        _ => Err(RuntimeError::ExpectedNumber { position }),
    }
}

/// Absolute value; the modulus for complex numbers.
///
/// # Example
/// ```
/// use evalenv::interpreter::{
///     evaluator::function::builtin::abs,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// assert_eq!(abs(&[Value::Integer(-3)], 0).unwrap(), Value::Integer(3));
/// assert_eq!(abs(&[Value::Complex(ComplexNumber::new(3.0, 4.0))], 0).unwrap(),
///            Value::Real(5.0));
/// ```
pub fn abs(args: &[Value], position: usize) -> EvalResult<Value> {
    match single_arg("abs", args, position)? {
        Value::Integer(n) => n.checked_abs()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::Overflow { position }),
        Value::Real(r) => Ok(Value::Real(r.abs())),
        Value::Complex(c) => Ok(Value::Real(c.abs())),
        _ => Err(RuntimeError::ExpectedNumber { position }),
    }
}

/// Real part of a number. Integers and reals are returned unchanged.
pub fn real(args: &[Value], position: usize) -> EvalResult<Value> {
    match single_arg("real", args, position)? {
        Value::Complex(c) => Ok(Value::Real(c.real)),
        value @ (Value::Integer(_) | Value::Real(_)) => Ok(value.clone()),
        _ => Err(RuntimeError::ExpectedNumber { position }),
    }
}

/// Imaginary part of a number. Always `0` for integers and reals.
pub fn imag(args: &[Value], position: usize) -> EvalResult<Value> {
    match single_arg("imag", args, position)? {
        Value::Complex(c) => Ok(Value::Real(c.imaginary)),
        Value::Integer(_) => Ok(Value::Integer(0)),
        Value::Real(_) => Ok(Value::Real(0.0)),
        _ => Err(RuntimeError::ExpectedNumber { position }),
    }
}

/// Argument (phase angle) of a number, in radians.
///
/// # Example
/// ```
/// use evalenv::interpreter::{evaluator::function::builtin::arg, value::core::Value};
///
/// assert_eq!(arg(&[Value::Integer(-2)], 0).unwrap(), Value::Real(std::f64::consts::PI));
/// ```
pub fn arg(args: &[Value], position: usize) -> EvalResult<Value> {
    let value = single_arg("arg", args, position)?;
    match value {
        Value::Integer(_) | Value::Real(_) | Value::Complex(_) => {
            Ok(Value::Real(value.as_complex(position)?.arg()))
        },
        _ => Err(RuntimeError::ExpectedNumber { position }),
    }
}

/// Length of an array or string.
///
/// Strings are measured in characters.
///
/// # Example
/// ```
/// use evalenv::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// let arr = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
/// assert_eq!(len(&[arr], 0).unwrap(), Value::Integer(2));
/// assert_eq!(len(&[Value::from("héllo")], 0).unwrap(), Value::Integer(5));
/// ```
pub fn len(args: &[Value], position: usize) -> EvalResult<Value> {
    let count = match single_arg("len", args, position)? {
        Value::Array(arr) => arr.len(),
        Value::Str(s) => s.chars().count(),
        other => {
            return Err(RuntimeError::TypeError { details: format!("len is not defined for {}",
                                                                  other.type_name()),
                                                 position });
        },
    };
    Ok(Value::Integer(usize_to_i64_checked(count, position)?))
}

/// Applies a rounding operation (`floor`, `ceil`, or `round`) to a numeric
/// value.
///
/// The operation is selected by name.
/// Integers are returned as-is.
/// Non-numeric values cause an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use evalenv::interpreter::{evaluator::function::builtin::unary_round, value::core::Value};
///
/// let r = unary_round("floor", &[Value::Real(3.8)], 0).unwrap();
/// assert_eq!(r, Value::Real(3.0));
/// ```
pub fn unary_round(name: &str, args: &[Value], position: usize) -> EvalResult<Value> {
    let op = match name {
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        "round" => f64::round,
        _ => {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       position });
        },
    };

    match single_arg(name, args, position)? {
        Value::Integer(i) => Ok(Value::Integer(*i)),
        Value::Real(r) => Ok(Value::Real(op(*r))),
        _ => Err(RuntimeError::ExpectedNumber { position }),
    }
}

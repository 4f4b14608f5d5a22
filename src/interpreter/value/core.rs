use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{array::NativeArray, complex::ComplexNumber},
    },
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the engine.
///
/// This enum models every value an expression can produce or a constant can
/// hold. There is no map kind; maps cross into the engine as tagged arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators or logical operations.
    Bool(bool),
    /// A complex number (with real and imaginary parts).
    Complex(ComplexNumber),
    /// A string value.
    Str(String),
    /// A one-row array of values.
    Array(NativeArray),
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v.into())
    }
}

impl From<NativeArray> for Value {
    fn from(v: NativeArray) -> Self {
        Self::Array(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not real-valued.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(0).unwrap(), 10.0);
    /// ```
    pub fn as_real(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => {
                Ok(i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { position })?)
            },
            _ => Err(RuntimeError::ExpectedNumber { position }),
        }
    }
    /// Converts the value to `ComplexNumber`, or returns an error if not
    /// numeric.
    ///
    /// Accepts `Value::Complex`, `Value::Real`, and `Value::Integer`.
    pub fn as_complex(&self, position: usize) -> EvalResult<ComplexNumber> {
        match self {
            Self::Complex(c) => Ok(*c),
            Self::Real(_) | Self::Integer(_) => Ok(ComplexNumber::from(self.as_real(position)?)),
            _ => Err(RuntimeError::ExpectedNumber { position }),
        }
    }
    /// Returns the integer, or an error if the value is not an integer.
    pub const fn as_integer(&self, position: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { position }),
        }
    }
    /// Returns the boolean, or an error if the value is not a boolean.
    pub const fn as_bool(&self, position: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { position }),
        }
    }
    /// Returns the array, or an error if the value is not an array.
    pub const fn as_array(&self, position: usize) -> EvalResult<&NativeArray> {
        match self {
            Self::Array(a) => Ok(a),
            _ => Err(RuntimeError::ExpectedArray { position }),
        }
    }
    /// Returns `true` for integers, reals and complex numbers.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_) | Self::Complex(_))
    }
    /// A short name of the value's kind, used in diagnostics.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Str("a".into()).type_name(), "string");
    /// assert_eq!(Value::from(vec![Value::Bool(true)]).type_name(), "array");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Real(_) => "float",
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Complex(_) => "complex",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Complex(complex) => (*complex).into(),
            LiteralValue::Str(s) => s.clone().into(),
        }
    }
}

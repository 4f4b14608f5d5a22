use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use tracing::{debug, trace, warn};

use crate::{
    convert::{native_to_object, object_to_native},
    error::{EngineError, EvalError},
    interpreter::{
        evaluator::core::Engine,
        value::{complex::ComplexNumber, core::Value},
    },
    object::Object,
    splitter::split_expr,
};

/// An expression evaluator with a table of named constants.
///
/// Besides plain engine expressions, [`eval`](Self::eval) understands two
/// literal forms that it decomposes itself, to any depth:
///
/// - `[e1, e2, ...]` evaluates every element and yields [`Object::Vector`];
/// - `{k1: v1, k2: v2, ...}` evaluates every key and value and yields
///   [`Object::Map`].
///
/// Constants registered with [`register_constant_expr`] or
/// [`register_constant_obj`] are visible to every later expression, and may
/// hold vectors and maps as well as scalars.
///
/// The environment is `Send + Sync`. All access to the engine goes through a
/// single mutex, taken once per leaf expression and once per registration.
///
/// [`register_constant_expr`]: Self::register_constant_expr
/// [`register_constant_obj`]: Self::register_constant_obj
///
/// # Example
/// ```
/// use evalenv::{EvalEnvironment, Object};
///
/// let env = EvalEnvironment::new();
/// env.register_constant_expr("gains", "[1, 2.5]").unwrap();
///
/// assert_eq!(env.eval("gains[1] * 2").unwrap(), Object::Float(5.0));
/// assert_eq!(env.eval("True and False").unwrap(), Object::Bool(false));
/// ```
#[derive(Debug)]
pub struct EvalEnvironment {
    engine: Mutex<Engine>,
}

impl Default for EvalEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalEnvironment {
    /// Creates an environment with the built-in constants `True`, `False` and
    /// the imaginary unit `j`.
    #[must_use]
    pub fn new() -> Self {
        let mut engine = Engine::new();
        engine.define_const("True", Value::Bool(true));
        engine.define_const("False", Value::Bool(false));
        engine.define_const("j", Value::Complex(ComplexNumber::new(0.0, 1.0)));

        Self { engine: Mutex::new(engine) }
    }

    /// Creates a new environment ready to be shared between threads.
    #[must_use]
    pub fn make() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Evaluates `expr` and returns the result as an [`Object`].
    ///
    /// # Errors
    /// - [`EvalError::EmptyExpression`] if `expr` (or a literal element) is
    ///   empty.
    /// - [`EvalError::NotKeyValue`] for a map entry without exactly one
    ///   top-level `:`.
    /// - [`EvalError::Evaluation`] with the engine diagnostic if the engine
    ///   rejects a leaf expression.
    /// - [`EvalError::UnknownType`] if a result cannot be converted.
    ///
    /// Errors from nested elements are wrapped in [`EvalError::Context`] once
    /// per enclosing literal.
    pub fn eval(&self, expr: &str) -> Result<Object, EvalError> {
        if expr.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        if let Some(body) = strip_delimiters(expr, '[', ']') {
            debug!(expr, "evaluating list literal");
            return split_expr(body, ',').iter()
                                        .map(|token| self.eval(token))
                                        .collect::<Result<Vec<_>, _>>()
                                        .map(Object::Vector)
                                        .map_err(|e| e.within(expr));
        }

        if let Some(body) = strip_delimiters(expr, '{', '}') {
            debug!(expr, "evaluating map literal");
            return self.eval_map_body(body).map_err(|e| e.within(expr));
        }

        debug!(expr, "evaluating expression");
        let value = self.eval_native(expr).map_err(|e| e.within(expr))?;
        native_to_object(&value).map_err(|e| e.within(expr))
    }

    /// Evaluates `expr` and binds the result to `key`, replacing any previous
    /// binding.
    ///
    /// The expression is evaluated before the constant table is touched, so a
    /// failure leaves the previous binding of `key` in place.
    ///
    /// # Errors
    /// Any error [`eval`](Self::eval) reports for `expr`.
    ///
    /// # Example
    /// ```
    /// use evalenv::{EvalEnvironment, Object};
    ///
    /// let env = EvalEnvironment::new();
    /// env.register_constant_expr("x", "21").unwrap();
    /// assert!(env.register_constant_expr("x", "nope + 1").is_err());
    /// assert_eq!(env.eval("x * 2").unwrap(), Object::Int(42));
    /// ```
    pub fn register_constant_expr(&self, key: &str, expr: &str) -> Result<(), EvalError> {
        let result = self.eval(expr)?;
        let value = object_to_native(&result).map_err(|e| e.within(expr))?;
        self.bind(key, value);
        Ok(())
    }

    /// Converts `obj` and binds it to `key`, replacing any previous binding.
    ///
    /// # Errors
    /// [`EvalError::UnknownType`] if `obj` contains a value that cannot be
    /// converted. The previous binding of `key` is left in place.
    pub fn register_constant_obj(&self, key: &str, obj: &Object) -> Result<(), EvalError> {
        let value = object_to_native(obj)?;
        self.bind(key, value);
        Ok(())
    }

    /// Returns `true` if a constant named `key` exists, built-in or
    /// registered.
    #[must_use]
    pub fn is_constant_defined(&self, key: &str) -> bool {
        self.lock().is_const_defined(key)
    }

    /// Reads the constant bound to `key` back as an [`Object`].
    ///
    /// Returns `Ok(None)` if `key` is unbound.
    ///
    /// # Errors
    /// [`EvalError::UnknownType`], wrapped with `key`, if the bound value
    /// cannot be converted.
    pub fn constant(&self, key: &str) -> Result<Option<Object>, EvalError> {
        let Some(value) = self.lock().constant(key).cloned() else {
            return Ok(None);
        };
        native_to_object(&value).map(Some).map_err(|e| e.within(key))
    }

    /// Parses and evaluates a leaf expression while holding the engine lock.
    fn eval_native(&self, expr: &str) -> Result<Value, EvalError> {
        let mut engine = self.lock();
        trace!(expr, "engine locked");
        engine.set_expr(expr)
              .map_err(EngineError::from)
              .and_then(|()| engine.eval().map_err(EngineError::from))
              .map_err(|e| EvalError::Evaluation { message: e.to_string() })
    }

    /// Evaluates the entries of a map literal body.
    fn eval_map_body(&self, body: &str) -> Result<Object, EvalError> {
        let mut map = BTreeMap::new();
        for token in split_expr(body, ',') {
            let [key, value] = <[String; 2]>::try_from(split_expr(&token, ':'))
                .map_err(|_| EvalError::NotKeyValue { token: token.clone() })?;
            let key = self.eval(&key)?;
            let value = self.eval(&value)?;
            map.entry(key).or_insert(value);
        }
        Ok(Object::Map(map))
    }

    /// Replaces the binding of `key` under the engine lock.
    fn bind(&self, key: &str, value: Value) {
        let kind = value.type_name();
        let replaced = self.lock().define_const(key, value).is_some();
        debug!(key, kind, replaced, "registered constant");
    }

    /// Locks the engine, recovering it if a previous holder panicked.
    ///
    /// The engine is only ever mutated by whole-value assignments, so it is
    /// consistent even after a panic.
    fn lock(&self) -> MutexGuard<'_, Engine> {
        self.engine.lock().unwrap_or_else(|poisoned| {
                              warn!("engine mutex was poisoned; recovering");
                              poisoned.into_inner()
                          })
    }
}

/// Returns the text between `open` and `close` if `expr` starts with `open`
/// and ends with `close`.
fn strip_delimiters(expr: &str, open: char, close: char) -> Option<&str> {
    if expr.len() < 2 {
        return None;
    }
    expr.strip_prefix(open)?.strip_suffix(close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        interpreter::value::array::{ArrayKind, NativeArray},
    };

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn environment_is_shareable() {
        assert_send_sync::<EvalEnvironment>();
    }

    #[test]
    fn builtin_constants_are_defined() {
        let env = EvalEnvironment::new();
        for name in ["True", "False", "j"] {
            assert!(env.is_constant_defined(name));
        }
        assert_eq!(env.constant("j").unwrap(), Some(Object::Complex(ComplexNumber::new(0.0, 1.0))));
    }

    #[test]
    fn empty_literals_are_empty_containers() {
        let env = EvalEnvironment::new();
        assert_eq!(env.eval("[]").unwrap(), Object::Vector(vec![]));
        assert_eq!(env.eval("{}").unwrap(), Object::Map(BTreeMap::new()));
    }

    #[test]
    fn trailing_comma_is_an_empty_element() {
        let err = EvalEnvironment::new().eval("[1,]").unwrap_err();
        assert_eq!(err.root_cause(), &EvalError::EmptyExpression);
        assert_eq!(err.to_string(), "eval([1,]): expression is empty");
    }

    #[test]
    fn map_entry_without_colon() {
        let err = EvalEnvironment::new().eval("{1}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.to_string(), "eval({1}): not key:value: 1");
    }

    #[test]
    fn single_brackets_are_not_literals() {
        assert!(EvalEnvironment::new().eval("[").is_err());
        assert!(strip_delimiters("[", '[', ']').is_none());
        assert_eq!(strip_delimiters("[]", '[', ']'), Some(""));
    }

    #[test]
    fn engine_errors_carry_the_expression() {
        let err = EvalEnvironment::new().eval("1 / 0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Evaluation);
        assert!(err.to_string().starts_with("eval(1 / 0): "));
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn null_object_cannot_be_registered() {
        let env = EvalEnvironment::new();
        env.register_constant_obj("x", &Object::Int(1)).unwrap();
        let err = env.register_constant_obj("x", &Object::Null).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conversion);
        assert_eq!(env.constant("x").unwrap(), Some(Object::Int(1)));
    }

    #[test]
    fn unreadable_constant_is_an_error() {
        let env = EvalEnvironment::new();
        let broken = NativeArray::new(vec![Value::Integer(1), Value::Integer(2)], ArrayKind::EncodedMap);
        env.lock().define_const("m", Value::Array(broken));

        let err = env.constant("m").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conversion);
        assert!(err.to_string().starts_with("eval(m): "));
        assert_eq!(env.constant("missing"), Ok(None));
    }

    #[test]
    fn engine_survives_an_out_of_range_exponent() {
        let env = EvalEnvironment::new();
        let err = env.eval("j ^ (-9223372036854775807 - 1)").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Evaluation);
        assert!(err.to_string().contains("overflow"), "{err}");
        assert!(!env.engine.is_poisoned());
        assert_eq!(env.eval("j ^ 4").unwrap(), Object::Complex(ComplexNumber::new(1.0, 0.0)));
    }
}

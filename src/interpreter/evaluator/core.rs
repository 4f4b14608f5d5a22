use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::Expr,
    error::{EngineError, ParseError, RuntimeError},
    interpreter::{parser::core::parse, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The expression engine.
///
/// Holds the constant table and the most recently set expression. An
/// expression is parsed once by [`Engine::set_expr`] and may then be evaluated
/// any number of times with [`Engine::eval`], each time against the constants
/// bound at that moment.
///
/// ## Usage
///
/// ```
/// use evalenv::interpreter::{evaluator::core::Engine, value::core::Value};
///
/// let mut engine = Engine::new();
/// engine.define_const("x", Value::Integer(4));
/// engine.set_expr("x * 2 + 1").unwrap();
///
/// assert_eq!(engine.eval().unwrap(), Value::Integer(9));
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    /// Named constants visible to every expression.
    constants: HashMap<String, Value>,
    /// The parsed form of the last expression passed to `set_expr`.
    expr:      Option<Expr>,
}

impl Engine {
    /// Creates an engine with an empty constant table and no expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Binds `name` to `value`, returning the previous binding if there was
    /// one.
    pub fn define_const(&mut self, name: &str, value: Value) -> Option<Value> {
        trace!(name, kind = value.type_name(), "define constant");
        self.constants.insert(name.to_string(), value)
    }
    /// Removes the binding of `name`, returning it if it existed.
    ///
    /// Part of the engine's constant-table API for embedders that drive an
    /// [`Engine`] directly; the environment only ever rebinds.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::{evaluator::core::Engine, value::core::Value};
    ///
    /// let mut engine = Engine::new();
    /// engine.define_const("rate", Value::Integer(48_000));
    /// assert_eq!(engine.remove_const("rate"), Some(Value::Integer(48_000)));
    /// assert!(!engine.is_const_defined("rate"));
    /// assert!(engine.evaluate("rate").is_err());
    /// ```
    pub fn remove_const(&mut self, name: &str) -> Option<Value> {
        self.constants.remove(name)
    }
    /// Returns `true` if `name` is bound in the constant table.
    #[must_use]
    pub fn is_const_defined(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }
    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }
    /// Parses `source` and makes it the current expression.
    ///
    /// On failure the previous expression is discarded, so a following
    /// [`Engine::eval`] reports [`RuntimeError::NoExpression`] instead of
    /// silently evaluating stale text.
    ///
    /// # Errors
    /// Any [`ParseError`] produced while tokenizing or parsing `source`.
    pub fn set_expr(&mut self, source: &str) -> Result<(), ParseError> {
        self.expr = None;
        self.expr = Some(parse(source)?);
        Ok(())
    }
    /// Evaluates the current expression.
    ///
    /// # Errors
    /// [`RuntimeError::NoExpression`] if no expression is set, or any error
    /// raised while evaluating it.
    pub fn eval(&self) -> EvalResult<Value> {
        let expr = self.expr.as_ref().ok_or(RuntimeError::NoExpression)?;
        self.eval_expr(expr)
    }
    /// Parses and evaluates `source` in one step.
    ///
    /// # Errors
    /// An [`EngineError`] wrapping the parse or runtime failure.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::{evaluator::core::Engine, value::core::Value};
    ///
    /// let mut engine = Engine::new();
    /// assert_eq!(engine.evaluate("\"ab\" + \"c\"").unwrap(), Value::from("abc"));
    /// assert!(engine.evaluate("1 +").is_err());
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<Value, EngineError> {
        self.set_expr(source)?;
        Ok(self.eval()?)
    }
    /// Evaluates an expression node and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant: literals,
    /// constants, unary and binary operations, function calls, array literals
    /// and array indexing.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, position } => self.eval_variable(name, *position),
            Expr::UnaryOp { op, expr, position } => self.eval_unary_op(*op, expr, *position),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => {
                self.eval_function_call(name, arguments, *position)
            },
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements),
            Expr::ArrayIndex { array,
                               index,
                               position, } => self.eval_array_index(array, index, *position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_without_expression_fails() {
        assert_eq!(Engine::new().eval(), Err(RuntimeError::NoExpression));
    }

    #[test]
    fn failed_set_expr_clears_previous_expression() {
        let mut engine = Engine::new();
        engine.set_expr("1 + 1").unwrap();
        assert!(engine.set_expr("1 +").is_err());
        assert_eq!(engine.eval(), Err(RuntimeError::NoExpression));
    }

    #[test]
    fn constants_are_read_at_eval_time() {
        let mut engine = Engine::new();
        engine.define_const("a", Value::Integer(1));
        engine.set_expr("a + 1").unwrap();
        assert_eq!(engine.eval().unwrap(), Value::Integer(2));

        engine.define_const("a", Value::Integer(10));
        assert_eq!(engine.eval().unwrap(), Value::Integer(11));

        engine.remove_const("a");
        assert!(matches!(engine.eval(), Err(RuntimeError::UnknownVariable { .. })));
    }
}

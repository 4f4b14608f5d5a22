use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Engine, EvalResult},
            function::{builtin, conj, min_max, sqrt},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the byte
/// offset of the call.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin is variadic with at least `n` arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every built-in function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "ln"    => { arity: Arity::Exact(1), func: builtin::ln },
    "sin"   => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"   => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"   => { arity: Arity::Exact(1), func: builtin::tan },
    "sinh"  => { arity: Arity::Exact(1), func: builtin::sinh },
    "cosh"  => { arity: Arity::Exact(1), func: builtin::cosh },
    "tanh"  => { arity: Arity::Exact(1), func: builtin::tanh },
    "exp"   => { arity: Arity::Exact(1), func: builtin::exp },
    "sqrt"  => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "real"  => { arity: Arity::Exact(1), func: builtin::real },
    "imag"  => { arity: Arity::Exact(1), func: builtin::imag },
    "arg"   => { arity: Arity::Exact(1), func: builtin::arg },
    "conj"  => { arity: Arity::Exact(1), func: conj::conj },
    "floor" => { arity: Arity::Exact(1), func: |args, position| builtin::unary_round("floor", args, position) },
    "ceil"  => { arity: Arity::Exact(1), func: |args, position| builtin::unary_round("ceil", args, position) },
    "round" => { arity: Arity::Exact(1), func: |args, position| builtin::unary_round("round", args, position) },
    "min"   => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("min", args, position) },
    "max"   => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("max", args, position) },
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    /// The count reported when the check fails.
    const fn expected(self) -> usize {
        match self {
            Self::Exact(m) | Self::AtLeast(m) => m,
        }
    }
}

impl Engine {
    /// Evaluates a function call.
    ///
    /// Looks the name up in the builtin table, verifies the argument count and
    /// runs the builtin.
    ///
    /// # Errors
    /// - `UnknownFunction` if no builtin has this name.
    /// - `ArgumentCountMismatch` if the arity does not match.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::{evaluator::core::Engine, value::core::Value};
    ///
    /// let v = Engine::eval_function("max", &[Value::Integer(3), Value::Real(4.5)], 0).unwrap();
    /// assert_eq!(v, Value::Real(4.5));
    ///
    /// assert!(Engine::eval_function("nope", &[], 0).is_err());
    /// ```
    pub fn eval_function(name: &str, args: &[Value], position: usize) -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                                  position })?;

        if !builtin.arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: builtin.arity.expected(),
                                                             found: args.len(),
                                                             position });
        }

        (builtin.func)(args, position)
    }
}

/// Returns the only argument of a one-argument builtin.
///
/// The table already enforces the arity; this keeps direct calls from
/// panicking on a malformed slice.
pub fn single_arg<'a>(name: &str, args: &'a [Value], position: usize) -> EvalResult<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                       expected: 1,
                                                       found: args.len(),
                                                       position }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_argument_count_is_reported() {
        assert_eq!(Engine::eval_function("sin", &[], 3),
                   Err(RuntimeError::ArgumentCountMismatch { name:     "sin".to_string(),
                                                             expected: 1,
                                                             found:    0,
                                                             position: 3, }));
    }

    #[test]
    fn every_builtin_is_reachable_by_name() {
        for name in BUILTIN_FUNCTIONS {
            assert!(BUILTIN_TABLE.iter().any(|b| b.name == *name));
        }
    }
}

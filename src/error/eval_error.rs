use thiserror::Error;

/// Broad classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed literal syntax or an empty expression.
    Syntax,
    /// A value of a kind the converters do not handle.
    Conversion,
    /// The expression engine rejected the expression.
    Evaluation,
}

/// Error returned by every public operation of
/// [`EvalEnvironment`](crate::EvalEnvironment).
///
/// Failures raised inside nested list or map literals are wrapped in
/// [`EvalError::Context`] once per enclosing expression, so the rendered
/// message reads outermost expression first and ends with the root cause:
///
/// ```text
/// eval([1, {2: foo}]): eval({2: foo}): eval(foo): Error at position 0: Unknown variable 'foo'.
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// `eval` was called with an empty string.
    #[error("expression is empty")]
    EmptyExpression,
    /// A map literal entry did not split into exactly one key and one value.
    #[error("not key:value: {token}")]
    NotKeyValue {
        /// The offending entry text.
        token: String,
    },
    /// A value of an unsupported kind reached a converter.
    #[error("unknown type {type_name}")]
    UnknownType {
        /// Description of the rejected value.
        type_name: String,
    },
    /// The expression engine failed; `message` is its diagnostic.
    #[error("{message}")]
    Evaluation {
        /// The engine's diagnostic text.
        message: String,
    },
    /// An error raised while evaluating `expr`.
    #[error("eval({expr}): {source}")]
    Context {
        /// The enclosing expression text.
        expr:   String,
        /// The underlying failure.
        #[source]
        source: Box<Self>,
    },
}

impl EvalError {
    /// Wraps `self` with the text of the expression that was being evaluated.
    #[must_use]
    pub fn within(self, expr: &str) -> Self {
        Self::Context { expr:   expr.to_string(),
                        source: Box::new(self), }
    }

    /// Returns the innermost error, skipping all [`EvalError::Context`] layers.
    ///
    /// # Example
    /// ```
    /// use evalenv::error::EvalError;
    ///
    /// let err = EvalError::EmptyExpression.within("[1, ]").within("{1: [1, ]}");
    /// assert_eq!(err.root_cause(), &EvalError::EmptyExpression);
    /// ```
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Classifies the root cause of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.root_cause() {
            Self::EmptyExpression | Self::NotKeyValue { .. } => ErrorKind::Syntax,
            Self::UnknownType { .. } => ErrorKind::Conversion,
            Self::Evaluation { .. } | Self::Context { .. } => ErrorKind::Evaluation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_renders_outermost_first() {
        let err = EvalError::Evaluation { message: "boom".into() }.within("x")
                                                                 .within("[x]");
        assert_eq!(err.to_string(), "eval([x]): eval(x): boom");
        assert_eq!(err.kind(), ErrorKind::Evaluation);
    }

    #[test]
    fn kind_sees_through_context() {
        let err = EvalError::NotKeyValue { token: "1".into() }.within("{1}");
        assert_eq!(err.kind(), ErrorKind::Syntax);

        let err = EvalError::UnknownType { type_name: "null".into() }.within("x");
        assert_eq!(err.kind(), ErrorKind::Conversion);
    }
}

use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset into the expression text at which
/// the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer found a character sequence that is not a token.
    #[error("Error at position {position}: Invalid token '{token}'.")]
    InvalidToken {
        /// The offending source slice.
        token:    String,
        /// Byte offset of the slice.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset where more input was expected.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// A closing bracket `]` was expected but not found.
    #[error("Error at position {position}: Expected closing bracket ']' but none found.")]
    ExpectedClosingBracket {
        /// Byte offset of the opening bracket.
        position: usize,
    },
    /// Found extra tokens after the expression should have ended.
    #[error("Error at position {position}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A literal value was too large to be represented safely.
    #[error("Error at position {position}: Literal is too large.")]
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
    /// The expression text contained no tokens at all.
    #[error("Expression contains no tokens.")]
    EmptyInput,
}

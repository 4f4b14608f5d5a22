use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_logical_or,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the recursive entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}

/// Tokenizes and parses `source` as exactly one expression.
///
/// End-of-input errors are reported at the end of `source`.
///
/// # Errors
/// - `EmptyInput` if `source` contains no tokens.
/// - `UnexpectedTrailingTokens` if anything follows a complete expression.
/// - Any lexing or grammar error.
///
/// # Example
/// ```
/// use evalenv::{ast::Expr, interpreter::parser::core::parse};
///
/// assert!(matches!(parse("1 + 2").unwrap(), Expr::BinaryOp { .. }));
/// assert!(parse("1 +").is_err());
/// assert!(parse("1 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter).map_err(|e| match e {
        ParseError::UnexpectedEndOfInput { .. } => {
            ParseError::UnexpectedEndOfInput { position: source.len() }
        },
        other => other,
    })?;

    if let Some((tok, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    format!("{tok:?}"),
                                                          position: *position, });
    }

    Ok(expr)
}

use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
    util::num::i64_to_f64_checked,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (no-op)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. Without a prefix operator the function delegates to
/// [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "!") unary
///            | exponent
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Minus, position)) => {
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op:       UnaryOperator::Negate,
                               expr:     Box::new(expr),
                               position: *position, })
        },
        Some((Token::Plus, _)) => {
            tokens.next();
            parse_unary(tokens)
        },
        Some((Token::Bang, position)) => {
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op:       UnaryOperator::Not,
                               expr:     Box::new(expr),
                               position: *position, })
        },
        _ => parse_exponent(tokens),
    }
}

/// Parses a primary expression followed by any number of index suffixes.
///
/// Grammar:
/// ```text
///     postfix := primary ("[" expression "]")*
/// ```
///
/// # Errors
/// Returns a `ParseError` if an `[` is not closed with `]` or the index
/// expression fails to parse.
pub(crate) fn parse_postfix_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_primary(tokens)?;

    while let Some((Token::LBracket, index_position)) = tokens.peek() {
        tokens.next();
        let index = parse_expression(tokens)?;
        match tokens.next() {
            Some((Token::RBracket, _)) => {
                node = Expr::ArrayIndex { array:    Box::new(node),
                                          index:    Box::new(index),
                                          position: *index_position, };
            },
            _ => return Err(ParseError::ExpectedClosingBracket { position: *index_position }),
        }
    }

    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
///              | "[" elements "]"
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Real(..) | Token::Integer(..), _) => parse_number(tokens),
        (Token::Bool(b), position) => {
            tokens.next();
            Ok(Expr::Literal { value:    (*b).into(),
                               position: *position, })
        },
        (Token::Str(s), position) => {
            tokens.next();
            Ok(Expr::Literal { value:    s.clone().into(),
                               position: *position, })
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::LBracket, _) => parse_array_literal(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                             position: *position, }),
    }
}

/// Parses a numeric literal, with an optional imaginary suffix.
///
/// Only `i` and `j` are accepted as imaginary-unit suffixes; `3i` and `3j`
/// both produce `LiteralValue::Complex(0.0, 3.0)`. Any other identifier
/// directly after a number is a parse error.
///
/// Grammar (simplified):
/// ```text
///     number := INTEGER [("i" | "j")]?
///             | REAL    [("i" | "j")]?
/// ```
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (value, position) = match tokens.next() {
        Some((Token::Real(n), position)) => (LiteralValue::Real(*n), *position),
        Some((Token::Integer(n), position)) => (LiteralValue::Integer(*n), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };

    match tokens.peek() {
        Some((Token::Identifier(id), _)) if id == "i" || id == "j" => {
            tokens.next();
            let imaginary = match value {
                LiteralValue::Integer(n) => {
                    i64_to_f64_checked(n, ParseError::LiteralTooLarge { position })?
                },
                LiteralValue::Real(r) => r,
                other => {
                    return Err(ParseError::UnexpectedToken { token: format!("{other:?}"),
                                                             position });
                },
            };
            Ok(Expr::Literal { value: (0.0, imaginary).into(),
                               position })
        },
        Some((Token::Identifier(id), id_position)) => {
            Err(ParseError::UnexpectedToken { token:    id.to_owned(),
                                              position: *id_position, })
        },
        _ => Ok(Expr::Literal { value, position }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// Returns the inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = tokens.next().map_or(0, |(_, p)| *p);
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses an array literal of the form `[expr1, expr2, ..., exprN]`.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = tokens.next().map_or(0, |(_, p)| *p);
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
    Ok(Expr::ArrayLiteral { elements, position })
}

/// Parses an identifier or a function call.
///
/// - `identifier(arg1, arg2, ...)` becomes [`Expr::FunctionCall`].
/// - Any other identifier becomes [`Expr::Variable`], resolved against the
///   constant table at evaluation time. The imaginary unit `j` is such a
///   constant; it is not special-cased here.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                     position: *position, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { position: 0 });
        },
    };

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       position });
    }

    Ok(Expr::Variable { name, position })
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, LiteralValue},
        error::ParseError,
        interpreter::parser::core::parse,
    };

    #[test]
    fn imaginary_suffix_makes_complex_literal() {
        assert_eq!(parse("3j").unwrap(),
                   Expr::Literal { value:    LiteralValue::from((0.0, 3.0)),
                                   position: 0, });
    }

    #[test]
    fn identifier_after_number_is_rejected() {
        assert!(matches!(parse("3k"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn chained_indexing() {
        match parse("a[0][1]").unwrap() {
            Expr::ArrayIndex { array, .. } => {
                assert!(matches!(*array, Expr::ArrayIndex { .. }));
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unclosed_paren_is_reported() {
        assert!(matches!(parse("(1 + 2"), Err(ParseError::ExpectedClosingParen { position: 0 })));
    }

    #[test]
    fn missing_operand_reports_end_of_input() {
        assert_eq!(parse("1 +"), Err(ParseError::UnexpectedEndOfInput { position: 3 }));
    }
}

use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_postfix_expression, parse_unary},
        },
    },
};

/// Parses one left-associative precedence level.
///
/// `next` parses the operands, `accepts` selects the operators that belong to
/// this level.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           next: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           accepts: fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = next(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            let position = *position;
            tokens.next();
            let right = next(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := xor (("or" | "||") xor)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_logical_xor, |op| op == BinaryOperator::Or)
}

/// Parses logical XOR expressions.
///
/// Grammar: `xor := and ("xor" and)*`
pub fn parse_logical_xor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_logical_and, |op| op == BinaryOperator::Xor)
}

/// Parses logical AND expressions.
///
/// Grammar: `and := relational (("and" | "&&") relational)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_relational, |op| op == BinaryOperator::And)
}

/// Parses relational and equality operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`.
///
/// Grammar: `relational := additive (rel_op additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_additive, is_relational_op)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Parses exponentiation expressions.
///
/// Exponentiation binds tighter than prefix operators and is
/// right-associative: `-a ^ b ^ c` parses as `-(a ^ (b ^ c))`. The exponent
/// may carry its own sign, so `2 ^ -1` is accepted.
///
/// Grammar: `exponent := postfix ("^" unary)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_postfix_expression(tokens)?;
    if let Some((Token::Caret, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let right = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(right),
                                   position });
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use evalenv::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Xor => Some(BinaryOperator::Xor),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the relational class.
///
/// # Example
/// ```
/// use evalenv::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(!is_relational_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr},
        interpreter::parser::core::parse,
    };

    fn top_op(source: &str) -> BinaryOperator {
        match parse(source).unwrap() {
            Expr::BinaryOp { op, .. } => op,
            other => panic!("expected binary op, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(top_op("1 + 2 * 3"), BinaryOperator::Add);
        assert_eq!(top_op("1 * 2 + 3"), BinaryOperator::Add);
    }

    #[test]
    fn logic_binds_looser_than_comparison() {
        assert_eq!(top_op("1 < 2 and 3 > 2"), BinaryOperator::And);
        assert_eq!(top_op("True and False or True"), BinaryOperator::Or);
    }

    #[test]
    fn negation_applies_after_power() {
        assert!(matches!(parse("-2 ^ 2").unwrap(), Expr::UnaryOp { .. }));
    }

    #[test]
    fn power_is_right_associative() {
        match parse("2 ^ 3 ^ 2").unwrap() {
            Expr::BinaryOp { op: BinaryOperator::Pow, right, .. } => {
                assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Pow, .. }));
            },
            other => panic!("unexpected {other:?}"),
        }
    }
}

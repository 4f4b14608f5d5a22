use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in expression text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Double-quoted string literal with `\"`, `\\`, `\n` and `\t` escapes.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    Str(String),
    /// `xor`
    #[token("xor")]
    Xor,
    /// `and` or `&&`
    #[token("and")]
    #[token("&&")]
    And,
    /// `or` or `||`
    #[token("or")]
    #[token("||")]
    Or,
    /// Identifier tokens; constant or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
}

/// Tokenizes `source` into `(token, byte offset)` pairs.
///
/// # Errors
/// `InvalidToken` for the first slice the lexer does not recognize, and
/// `LiteralTooLarge` for integer literals that do not fit an `i64`.
///
/// # Example
/// ```
/// use evalenv::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x + 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".into()), 0), (Token::Plus, 2), (Token::Integer(2), 4)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) if lexer.slice().bytes().all(|b| b.is_ascii_digit()) => {
                return Err(ParseError::LiteralTooLarge { position });
            },
            Err(()) => {
                return Err(ParseError::InvalidToken { token: lexer.slice().to_string(),
                                                      position });
            },
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// Returns `None` (a lexing error) if the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Strips the quotes from a string literal and resolves its escapes.
///
/// Unknown escapes keep the escaped character as-is.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                other => out.push(other),
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_escapes_are_resolved() {
        let tokens = tokenize(r#""a\"b\\c""#).unwrap();
        assert_eq!(tokens, vec![(Token::Str("a\"b\\c".to_string()), 0)]);
    }

    #[test]
    fn keywords_win_over_identifiers() {
        let tokens = tokenize("True and android").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Identifier("True".into()), 0),
                        (Token::And, 5),
                        (Token::Identifier("android".into()), 9)]);
    }

    #[test]
    fn oversized_integer_is_reported() {
        assert_eq!(tokenize("99999999999999999999"),
                   Err(ParseError::LiteralTooLarge { position: 0 }));
    }

    #[test]
    fn stray_character_is_reported() {
        assert!(matches!(tokenize("1 $ 2"),
                         Err(ParseError::InvalidToken { position: 2, .. })));
    }
}

/// Parser entry points.
///
/// Contains the top-level `parse` function, which turns expression text into a
/// single AST node and rejects trailing input.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, postfix indexing, literals, identifiers,
/// function calls, grouping and array literals.
pub mod unary;

/// Binary operator parsing.
///
/// Implements one function per precedence level, from logical OR down to
/// exponentiation.
pub mod binary;

/// Shared parsing helpers.
pub mod utils;

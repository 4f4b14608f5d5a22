/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator owns the constant table, traverses the AST and performs all
/// arithmetic, string and logical operations. It is the part of the engine
/// that the environment locks around.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves named constants and built-in functions.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens, each
/// corresponding to a number, string, identifier, operator or delimiter,
/// together with its byte offset.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a single expression tree, applying operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, reporting errors with their byte offset.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value kinds the engine computes with: integers,
/// reals, booleans, complex numbers, strings and one-row arrays. It also
/// provides checked accessors used by the operators and converters.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Defines `NativeArray` and its map-encoding tag.
/// - Provides safe promotion between numeric types (e.g., integer to real).
pub mod value;

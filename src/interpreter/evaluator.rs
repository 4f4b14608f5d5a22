/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, string concatenation, comparisons and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and engine state.
///
/// Contains the [`core::Engine`], its constant table, the current expression
/// and the evaluation entry points.
pub mod core;

/// Utility functions for evaluation.
///
/// Per-node evaluation helpers and structural equality shared by the
/// operator modules.
pub mod utils;

/// Function evaluation.
///
/// Handles built-in function calls and argument checking.
pub mod function;

//! # evalenv
//!
//! evalenv is an embeddable expression evaluator written in Rust.
//! It evaluates arithmetic, logical and string expressions, understands list
//! (`[a, b]`) and map (`{k: v}`) literals, and lets callers register named
//! constants that may be scalars, vectors or maps. Results come back as a
//! dynamically-typed [`Object`].
//!
//! ```
//! use evalenv::{EvalEnvironment, Object};
//!
//! let env = EvalEnvironment::new();
//! env.register_constant_expr("cfg", r#"{"rate": 48000, "taps": [1, 2, 3]}"#).unwrap();
//!
//! let cfg = env.constant("cfg").unwrap().unwrap();
//! assert_eq!(cfg.as_map().unwrap()[&Object::from("rate")], Object::Int(48000));
//! assert_eq!(env.eval("j * j").unwrap().to_string(), "-1");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of expression text as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression, literal and operator types.
/// - Attaches byte offsets to AST nodes for error reporting.
pub mod ast;
/// Conversion between engine values and objects.
///
/// `native_to_object` and `object_to_native` translate between the engine's
/// [`Value`](interpreter::value::core::Value) and [`Object`], flattening maps
/// into tagged arrays on the way in and rebuilding them on the way out.
pub mod convert;
/// The evaluation environment.
///
/// Owns one engine behind a mutex, decomposes list and map literals, and
/// registers constants.
pub mod environment;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// evaluating or converting. It standardizes error reporting and carries
/// detailed information about failures, including positions and the trail of
/// enclosing expressions.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   environment).
/// - Attaches byte offsets and expression text for context.
/// - Implements `std::error::Error` through `thiserror`.
pub mod error;
/// The expression engine: lexer, parser, evaluator and runtime values.
///
/// This module ties together lexing, parsing and evaluation. The environment
/// drives it through [`Engine`](interpreter::evaluator::core::Engine).
pub mod interpreter;
/// The caller-facing dynamically-typed value.
pub mod object;
/// Top-level splitting of list and map literal bodies.
pub mod splitter;
/// General utilities for safe numeric conversion.
///
/// Safe conversions between `i64`, `u32`, `usize`, and `f64` used throughout
/// the parser and evaluator.
pub mod util;

pub use environment::EvalEnvironment;
pub use error::{ErrorKind, EvalError};
pub use object::Object;

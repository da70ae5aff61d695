//! # numera
//!
//! numera is an arithmetic expression evaluator written in Rust. It parses
//! and evaluates formulas whose operands are either scalar numbers or
//! fixed-length numeric vectors, with elementwise semantics, a built-in
//! function catalog, and host-supplied symbol resolution.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::Evaluator, symbol::SymbolResolver, value::core::Value},
};

/// Provides unified error types for compilation and evaluation.
///
/// This module defines all errors that can be raised while compiling or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds, offending
/// names or characters, and exact source columns for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (grammar, resolution,
///   arity/type, vector shapes, evaluator consistency).
/// - Attaches 0-based columns and supports column shifting for errors
///   raised inside nested function arguments.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the compiler, evaluator, function catalog,
/// symbol resolution, and value representations to provide a complete
/// engine for expression evaluation. It exposes the public API for
/// compiling and evaluating user formulas.
///
/// # Responsibilities
/// - Coordinates all core components: compiler, evaluator, catalog, and
///   value types.
/// - Provides entry points for evaluating expressions against host data.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities: text scanning and safe numeric conversion.
///
/// This module provides reusable helpers used throughout the compiler and
/// catalog: the character cursor the scanner is built on and checked
/// numeric conversions.
///
/// # Responsibilities
/// - Supplies the `TextCursor` scanning service.
/// - Safely converts between floating-point and integer types without
///   silent data loss.
pub mod util;

/// Evaluates an expression against a symbol resolver and returns the result.
///
/// This is the convenience entry point: it builds an [`Evaluator`] with the
/// builtin function catalog, compiles the expression once, and evaluates it
/// to a single [`Value`]. Use [`Evaluator::with_catalog`] directly to
/// substitute a custom function catalog.
///
/// # Errors
/// Returns an error with a positioned diagnostic if compilation fails, or
/// an unpositioned one if a vector shape error occurs during evaluation.
///
/// # Examples
/// ```
/// use numera::{
///     evaluate,
///     interpreter::{symbol::MapResolver, value::core::Value},
/// };
///
/// let mut resolver = MapResolver::new();
/// resolver.insert("x", Value::from(vec![1.0, 2.0, 3.0]));
///
/// // Scalars broadcast across vector operands.
/// let result = evaluate("2 * x", &resolver).unwrap();
/// assert_eq!(result, Value::from(vec![2.0, 4.0, 6.0]));
///
/// // Errors carry the exact column of the offending token.
/// let error = evaluate("2 + unknown", &resolver).unwrap_err();
/// assert_eq!(error.to_string(), "Error at column 5: Undefined symbol 'unknown'.");
/// ```
pub fn evaluate(expression: &str, resolver: &dyn SymbolResolver) -> Result<Value, EvalError> {
    Evaluator::new(resolver).evaluate(expression)
}

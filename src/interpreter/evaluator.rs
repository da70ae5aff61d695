/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations, enumerating every
/// Scalar/Vector shape combination explicitly for each operator.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation for scalars and, elementwise, for vectors.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Evaluator` entry point and the postfix stack machine that
/// executes compiled token sequences.
pub mod core;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing a compiled
/// expression.
pub enum RuntimeError {
    /// A binary operation combined two vectors of different lengths.
    LengthMismatch {
        /// Length of the left operand.
        left:  usize,
        /// Length of the right operand.
        right: usize,
    },
    /// An operator needed more operands than the stack held.
    ///
    /// The compiler enforces the token grammar, so this indicates a
    /// malformed token sequence rather than bad user input.
    StackUnderflow,
    /// Evaluation finished with a stack depth other than one.
    ///
    /// Like [`RuntimeError::StackUnderflow`], this is an internal
    /// consistency violation: the evaluator fails fast instead of guessing
    /// at a result.
    StackImbalance {
        /// The number of values left on the stack.
        depth: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { left, right } => write!(f,
                                                           "Cannot combine vectors of different lengths: {left} vs {right}."),
            Self::StackUnderflow => {
                write!(f, "Malformed token sequence: operator is missing an operand.")
            },
            Self::StackImbalance { depth } => write!(f,
                                                     "Malformed token sequence: evaluation ended with {depth} values on the stack."),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Compile-time errors.
///
/// Defines all error types that can occur while scanning and compiling an
/// expression: grammar mistakes, unresolved identifiers, and function
/// arity/type failures. Every variant carries the 0-based column of the
/// offending token.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors that can be raised while executing a compiled token
/// sequence: vector length mismatches and internal stack-consistency
/// violations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any error produced by compiling or evaluating an expression.
///
/// The public entry points return this type so a host can handle every
/// failure through a single channel while still distinguishing positioned
/// compile diagnostics from evaluation failures.
pub enum EvalError {
    /// The expression could not be compiled.
    Parse(ParseError),
    /// The compiled expression could not be evaluated.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Shifts the column of a positioned diagnostic by `offset`.
    ///
    /// Evaluation errors carry no column and are returned unchanged.
    #[must_use]
    pub fn with_offset(self, offset: usize) -> Self {
        match self {
            Self::Parse(e) => Self::Parse(e.with_offset(offset)),
            Self::Runtime(_) => self,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

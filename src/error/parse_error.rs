#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while compiling an expression.
///
/// Every variant carries the 0-based column of the offending token so the
/// host can point at the exact character in the original expression. Errors
/// raised while evaluating a nested function argument are shifted with
/// [`ParseError::with_offset`] before being re-raised, so the column is
/// always relative to the top-level expression.
pub enum ParseError {
    /// An operand was expected but not found.
    OperandExpected {
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// An operator was expected but an operand followed another operand.
    OperatorExpected {
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// A closing parenthesis had no matching open parenthesis.
    UnmatchedClosingParenthesis {
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// The expression ended while parentheses were still open.
    ClosingParenthesisExpected {
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// A number literal contained more than one decimal point.
    MultipleDecimalPoints {
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// A number literal could not be read as a value.
    InvalidOperand {
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// Found a character that no token can start with.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// The 0-based column where the error occurred.
        column:    usize,
    },
    /// The resolver did not recognize an identifier.
    UndefinedSymbol {
        /// The name of the symbol.
        name:   String,
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// The resolver recognized an identifier but its data is not available.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// Called a function the catalog does not provide.
    UndefinedFunction {
        /// The name of the function.
        name:   String,
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// A function was called with the wrong number of arguments.
    WrongParameterCount {
        /// The name of the function.
        name:   String,
        /// The 0-based column where the error occurred.
        column: usize,
    },
    /// A function was called with an argument shape it does not accept.
    WrongArgumentType {
        /// The name of the function.
        name:   String,
        /// The 0-based column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// Returns the 0-based column carried by this error.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::OperandExpected { column }
            | Self::OperatorExpected { column }
            | Self::UnmatchedClosingParenthesis { column }
            | Self::ClosingParenthesisExpected { column }
            | Self::MultipleDecimalPoints { column }
            | Self::InvalidOperand { column }
            | Self::UnexpectedCharacter { column, .. }
            | Self::UndefinedSymbol { column, .. }
            | Self::UndefinedVariable { column, .. }
            | Self::UndefinedFunction { column, .. }
            | Self::WrongParameterCount { column, .. }
            | Self::WrongArgumentType { column, .. } => *column,
        }
    }

    /// Shifts the carried column by `offset` positions.
    ///
    /// Used when an error raised inside a function argument is re-raised in
    /// the enclosing expression: the argument's start offset is added so the
    /// reported column matches the original text.
    #[must_use]
    pub fn with_offset(self, offset: usize) -> Self {
        match self {
            Self::OperandExpected { column } => Self::OperandExpected { column: column + offset },
            Self::OperatorExpected { column } => Self::OperatorExpected { column: column + offset },
            Self::UnmatchedClosingParenthesis { column } => {
                Self::UnmatchedClosingParenthesis { column: column + offset }
            },
            Self::ClosingParenthesisExpected { column } => {
                Self::ClosingParenthesisExpected { column: column + offset }
            },
            Self::MultipleDecimalPoints { column } => {
                Self::MultipleDecimalPoints { column: column + offset }
            },
            Self::InvalidOperand { column } => Self::InvalidOperand { column: column + offset },
            Self::UnexpectedCharacter { character, column } => {
                Self::UnexpectedCharacter { character,
                                            column: column + offset }
            },
            Self::UndefinedSymbol { name, column } => {
                Self::UndefinedSymbol { name,
                                        column: column + offset }
            },
            Self::UndefinedVariable { name, column } => {
                Self::UndefinedVariable { name,
                                          column: column + offset }
            },
            Self::UndefinedFunction { name, column } => {
                Self::UndefinedFunction { name,
                                          column: column + offset }
            },
            Self::WrongParameterCount { name, column } => {
                Self::WrongParameterCount { name,
                                            column: column + offset }
            },
            Self::WrongArgumentType { name, column } => {
                Self::WrongArgumentType { name,
                                          column: column + offset }
            },
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandExpected { column } => {
                write!(f, "Error at column {}: Operand expected.", column + 1)
            },
            Self::OperatorExpected { column } => {
                write!(f, "Error at column {}: Operator expected.", column + 1)
            },
            Self::UnmatchedClosingParenthesis { column } => write!(f,
                                                                   "Error at column {}: Closing parenthesis without matching open parenthesis.",
                                                                   column + 1),
            Self::ClosingParenthesisExpected { column } => {
                write!(f, "Error at column {}: Closing parenthesis expected.", column + 1)
            },
            Self::MultipleDecimalPoints { column } => write!(f,
                                                             "Error at column {}: Operand contains multiple decimal points.",
                                                             column + 1),
            Self::InvalidOperand { column } => {
                write!(f, "Error at column {}: Invalid operand.", column + 1)
            },
            Self::UnexpectedCharacter { character, column } => write!(f,
                                                                      "Error at column {}: Unexpected character '{character}'.",
                                                                      column + 1),
            Self::UndefinedSymbol { name, column } => {
                write!(f, "Error at column {}: Undefined symbol '{name}'.", column + 1)
            },
            Self::UndefinedVariable { name, column } => {
                write!(f, "Error at column {}: Data variable '{name}' not found.", column + 1)
            },
            Self::UndefinedFunction { name, column } => {
                write!(f, "Error at column {}: Undefined function '{name}'.", column + 1)
            },
            Self::WrongParameterCount { name, column } => write!(f,
                                                                 "Error at column {}: Wrong number of parameters for function '{name}'.",
                                                                 column + 1),
            Self::WrongArgumentType { name, column } => write!(f,
                                                               "Error at column {}: Wrong argument type for function '{name}'.",
                                                               column + 1),
        }
    }
}

impl std::error::Error for ParseError {}

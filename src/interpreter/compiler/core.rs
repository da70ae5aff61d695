use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        catalog::core::FunctionError,
        compiler::token::{Operator, State, Token},
        evaluator::core::Evaluator,
        symbol::SymbolLookup,
        value::core::Value,
    },
    util::cursor::TextCursor,
};

/// An entry on the shunting-yard stack: either a pending operator or the
/// marker for an open parenthesis.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(Operator),
    OpenParen,
}

/// Replaces the bracket synonyms `{ [ } ]` with plain parentheses.
///
/// Normalization happens on the whole expression before scanning begins, so
/// the scanner and all diagnostics only ever deal with `(` and `)`. The
/// replacement is one character for one character, which keeps every column
/// stable.
fn normalize_brackets(expression: &str) -> String {
    expression.chars()
              .map(|c| match c {
                  '{' | '[' => '(',
                  '}' | ']' => ')',
                  c => c,
              })
              .collect()
}

impl Evaluator<'_> {
    /// Compiles an infix expression into a postfix token sequence.
    ///
    /// Symbols are resolved and function calls are dispatched while
    /// scanning, so the resulting sequence contains only numbers, resolved
    /// values, and operator markers.
    ///
    /// # Errors
    /// Returns a positioned diagnostic for any grammar, resolution, arity,
    /// or type failure.
    pub(crate) fn compile(&self, expression: &str) -> Result<Vec<Token>, EvalError> {
        self.tokenize(&normalize_brackets(expression))
    }

    /// Converts a standard infix expression to a list of tokens in postfix
    /// order.
    ///
    /// The scanner walks the text once, keeping an explicit operator stack
    /// and a state that records what kind of token came last. The state
    /// decides whether `+` and `-` are binary or unary, and whether an
    /// operand or operator may legally appear at the current position.
    fn tokenize(&self, expression: &str) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::new();
        let mut stack: Vec<StackEntry> = Vec::new();
        let mut state = State::None;
        let mut paren_count = 0usize;

        let mut cursor = TextCursor::new(expression);

        while let Some(c) = cursor.peek() {
            if c.is_whitespace() {
                // Ignore spaces, tabs, etc.
            } else if c == '(' {
                // Cannot follow an operand.
                if state == State::Operand {
                    return Err(ParseError::OperatorExpected { column: cursor.position() }.into());
                }

                // Allow additional unary operators after "(".
                if state == State::UnaryOperator {
                    state = State::Operator;
                }

                stack.push(StackEntry::OpenParen);
                paren_count += 1;
            } else if c == ')' {
                // Must have a matching open parenthesis.
                if paren_count == 0 {
                    return Err(ParseError::UnmatchedClosingParenthesis { column:
                                                                             cursor.position() }.into());
                }

                // Must follow an operand.
                if state != State::Operand {
                    return Err(ParseError::OperandExpected { column: cursor.position() }.into());
                }

                // Pop all operators until the matching "(" is found.
                loop {
                    match stack.pop() {
                        Some(StackEntry::OpenParen) => break,
                        Some(StackEntry::Operator(op)) => tokens.push(Token::Operator(op)),
                        None => {
                            return Err(ParseError::UnmatchedClosingParenthesis {
                                column: cursor.position(),
                            }.into());
                        },
                    }
                }
                paren_count -= 1;
            } else if matches!(c, '+' | '-' | '*' | '/' | '^') {
                match state {
                    State::Operand => {
                        let op = match c {
                            '+' => Operator::Plus,
                            '-' => Operator::Minus,
                            '*' => Operator::Multiply,
                            '/' => Operator::Divide,
                            _ => Operator::Power,
                        };

                        // Pop operators with precedence >= the current
                        // operator (left-associative, `^` included).
                        while let Some(StackEntry::Operator(top)) = stack.last().copied() {
                            if top.precedence() < op.precedence() {
                                break;
                            }
                            tokens.push(Token::Operator(top));
                            stack.pop();
                        }
                        stack.push(StackEntry::Operator(op));
                        state = State::Operator;
                    },
                    // Two unary operators in a row are not allowed.
                    State::UnaryOperator => {
                        return Err(ParseError::OperandExpected { column:
                                                                     cursor.position() }.into());
                    },
                    State::None | State::Operator => {
                        if c == '-' {
                            // A sign binds tighter than any binary operator.
                            stack.push(StackEntry::Operator(Operator::UnaryMinus));
                            state = State::UnaryOperator;
                        } else if c == '+' {
                            // A unary plus produces no token.
                            state = State::UnaryOperator;
                        } else {
                            return Err(ParseError::OperandExpected { column:
                                                                         cursor.position() }.into());
                        }
                    },
                }
            } else if c.is_ascii_digit() || c == '.' {
                // Cannot follow another operand.
                if state == State::Operand {
                    return Err(ParseError::OperatorExpected { column: cursor.position() }.into());
                }

                let value = scan_number(&mut cursor)?;
                tokens.push(Token::Number(value));
                state = State::Operand;
                continue;
            } else {
                // A symbol or function cannot follow another operand.
                if state == State::Operand {
                    return Err(ParseError::OperatorExpected { column: cursor.position() }.into());
                }
                if !(c.is_alphabetic() || c == '_') {
                    return Err(ParseError::UnexpectedCharacter { character: c,
                                                                 column:    cursor.position() }.into());
                }

                // Save the start of the identifier for error reporting.
                let start = cursor.position();
                let name = scan_identifier(&mut cursor);
                cursor.skip_whitespace();

                let value = if cursor.peek() == Some('(') {
                    // Found a parameter list: dispatch a function call.
                    self.call_function(&mut cursor, &name, start)?
                } else {
                    // No parameter list: resolve as a symbol.
                    self.resolve_symbol(&name, start)?
                };

                tokens.push(Token::Value(value));
                state = State::Operand;
                continue;
            }
            cursor.advance();
        }

        // The expression cannot end with an operator.
        if state == State::Operator || state == State::UnaryOperator {
            return Err(ParseError::OperandExpected { column: cursor.position() }.into());
        }
        // Check for balanced parentheses.
        if paren_count > 0 {
            return Err(ParseError::ClosingParenthesisExpected { column: cursor.position() }.into());
        }

        // Retrieve the remaining operators from the stack in LIFO order.
        while let Some(entry) = stack.pop() {
            if let StackEntry::Operator(op) = entry {
                tokens.push(Token::Operator(op));
            }
        }

        Ok(tokens)
    }

    /// Evaluates a function call and returns its value.
    ///
    /// The cursor must sit on the opening parenthesis of the argument list;
    /// on success it has moved past the closing one. Catalog failures are
    /// turned into diagnostics pointing at `start`, the column where the
    /// function name begins.
    fn call_function(&self,
                     cursor: &mut TextCursor,
                     name: &str,
                     start: usize)
                     -> Result<Value, EvalError> {
        let arguments = self.collect_arguments(cursor)?;

        self.catalog.call(name, &arguments).map_err(|e| {
                                               let name = name.to_string();
                                               let error = match e {
                                                   FunctionError::UndefinedFunction => {
                                                       ParseError::UndefinedFunction { name,
                                                                                       column:
                                                                                           start }
                                                   },
                                                   FunctionError::WrongParameterCount => {
                                                       ParseError::WrongParameterCount { name,
                                                                                         column:
                                                                                             start }
                                                   },
                                                   FunctionError::WrongArgumentType => {
                                                       ParseError::WrongArgumentType { name,
                                                                                       column:
                                                                                           start }
                                                   },
                                               };
                                               error.into()
                                           })
    }

    /// Evaluates each parameter of a function's parameter list and returns
    /// the list of their values.
    ///
    /// An empty list is returned if no parameters were found. Commas inside
    /// nested parentheses do not split arguments; each argument substring is
    /// compiled and evaluated as a full expression of its own. The cursor
    /// must sit on the opening parenthesis and ends up past the closing one.
    fn collect_arguments(&self, cursor: &mut TextCursor) -> Result<Vec<Value>, EvalError> {
        // Move past the open parenthesis.
        cursor.advance();

        let mut arguments = Vec::new();
        cursor.skip_whitespace();

        if cursor.peek() != Some(')') {
            let mut start = cursor.position();
            let mut depth = 1usize;

            while let Some(c) = cursor.peek() {
                if c == ',' && depth == 1 {
                    arguments.push(self.evaluate_argument(cursor, start)?);
                    start = cursor.position() + 1;
                }
                if c == ')' {
                    depth -= 1;
                    if depth == 0 {
                        arguments.push(self.evaluate_argument(cursor, start)?);
                        break;
                    }
                } else if c == '(' {
                    depth += 1;
                }
                cursor.advance();
            }
        }

        // Make sure we found a closing parenthesis.
        if cursor.peek() != Some(')') {
            return Err(ParseError::ClosingParenthesisExpected { column: cursor.position() }.into());
        }
        // Move past it.
        cursor.advance();

        Ok(arguments)
    }

    /// Extracts and evaluates a single function argument.
    ///
    /// If the evaluation fails with a positioned diagnostic, the argument's
    /// start offset is added to its column before re-raising, so the
    /// reported position refers to the original top-level expression.
    fn evaluate_argument(&self, cursor: &TextCursor, start: usize) -> Result<Value, EvalError> {
        let expression = cursor.extract(start, cursor.position());

        self.evaluate(&expression).map_err(|e| e.with_offset(start))
    }

    /// Resolves a symbol name through the host resolver.
    fn resolve_symbol(&self, name: &str, column: usize) -> Result<Value, EvalError> {
        match self.resolver.resolve(name) {
            SymbolLookup::Resolved(value) => Ok(value),
            SymbolLookup::UndefinedSymbol => {
                Err(ParseError::UndefinedSymbol { name: name.to_string(),
                                                  column }.into())
            },
            SymbolLookup::UndefinedVariable => {
                Err(ParseError::UndefinedVariable { name: name.to_string(),
                                                    column }.into())
            },
        }
    }
}

/// Parses and extracts a numeric literal at the current position.
///
/// Only one decimal point is allowed per literal, and a lone `.` is not an
/// operand. The literal uses the fixed `.`-as-decimal-point convention
/// regardless of locale.
fn scan_number(cursor: &mut TextCursor) -> Result<f64, ParseError> {
    let start = cursor.position();
    let mut has_decimal = false;

    while let Some(c) = cursor.peek() {
        if c == '.' {
            if has_decimal {
                return Err(ParseError::MultipleDecimalPoints { column: cursor.position() });
            }
            has_decimal = true;
        } else if !c.is_ascii_digit() {
            break;
        }
        cursor.advance();
    }

    let text = cursor.extract(start, cursor.position());
    if text == "." {
        return Err(ParseError::InvalidOperand { column: cursor.position() - 1 });
    }

    text.parse().map_err(|_| ParseError::InvalidOperand { column: start })
}

/// Parses and extracts an identifier at the current position.
///
/// The first character (a letter or `_`) has already been checked by the
/// caller; the scan continues over letters, digits, and `_`.
fn scan_identifier(cursor: &mut TextCursor) -> String {
    let start = cursor.position();

    while let Some(c) = cursor.peek() {
        if !(c.is_alphanumeric() || c == '_') {
            break;
        }
        cursor.advance();
    }

    cursor.extract(start, cursor.position())
}

use crate::{
    error::{EvalError, RuntimeError},
    interpreter::{
        catalog::core::{Builtins, FunctionCatalog},
        compiler::token::{Operator, Token},
        evaluator::{binary::core::eval_binary, unary::eval_negate},
        symbol::SymbolResolver,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

static DEFAULT_CATALOG: Builtins = Builtins;

/// Compiles and evaluates expressions against a resolver and a catalog.
///
/// The evaluator holds no state of its own beyond the two capability
/// handles, so one instance can evaluate any number of expressions; each
/// call compiles the text once and executes the resulting postfix sequence
/// immediately.
///
/// ## Usage
///
/// Construct with [`Evaluator::new`] to use the builtin function catalog, or
/// [`Evaluator::with_catalog`] to substitute a custom one.
pub struct Evaluator<'a> {
    pub(crate) resolver: &'a dyn SymbolResolver,
    pub(crate) catalog:  &'a dyn FunctionCatalog,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator using the builtin function catalog.
    #[must_use]
    pub fn new(resolver: &'a dyn SymbolResolver) -> Self {
        Self { resolver,
               catalog: &DEFAULT_CATALOG, }
    }

    /// Creates an evaluator with a custom function catalog.
    #[must_use]
    pub fn with_catalog(resolver: &'a dyn SymbolResolver,
                        catalog: &'a dyn FunctionCatalog)
                        -> Self {
        Self { resolver, catalog }
    }

    /// Compiles `expression` and evaluates it to a single value.
    ///
    /// # Errors
    /// Returns an [`EvalError`] with a positioned diagnostic for any
    /// grammar, resolution, arity, or type failure, and an unpositioned one
    /// for vector shape errors.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     symbol::EmptyResolver,
    ///     value::core::Value,
    /// };
    ///
    /// let evaluator = Evaluator::new(&EmptyResolver);
    ///
    /// let result = evaluator.evaluate("2 + 3 * 4").unwrap();
    /// assert_eq!(result, Value::Scalar(14.0));
    /// ```
    pub fn evaluate(&self, expression: &str) -> Result<Value, EvalError> {
        let tokens = self.compile(expression)?;
        Ok(execute_tokens(&tokens)?)
    }
}

/// Executes a compiled token sequence and returns the result.
///
/// Tokens must appear in postfix order. Numbers and pre-resolved values push
/// directly onto the operand stack; a binary operator pops its right operand
/// first, then its left; `UnaryMinus` pops a single operand. Exactly one
/// value must remain at the end — any other depth means the sequence did not
/// come out of the compiler intact, and the evaluator fails fast instead of
/// guessing at a result.
pub(crate) fn execute_tokens(tokens: &[Token]) -> EvalResult<Value> {
    let mut stack: Vec<Value> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(n) => stack.push(Value::Scalar(*n)),
            Token::Value(v) => stack.push(v.clone()),
            Token::Operator(Operator::UnaryMinus) => {
                let operand = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                stack.push(eval_negate(&operand));
            },
            Token::Operator(op) => {
                let right = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                let left = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                stack.push(eval_binary(*op, &left, &right)?);
            },
        }
    }

    let result = stack.pop().ok_or(RuntimeError::StackImbalance { depth: 0 })?;
    if !stack.is_empty() {
        return Err(RuntimeError::StackImbalance { depth: stack.len() + 1 });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::execute_tokens;
    use crate::{
        error::RuntimeError,
        interpreter::{
            compiler::token::{Operator, Token},
            value::core::Value,
        },
    };

    #[test]
    fn binary_operators_pop_right_then_left() {
        // 10 4 - => 6
        let tokens = [Token::Number(10.0),
                      Token::Number(4.0),
                      Token::Operator(Operator::Minus)];

        assert_eq!(execute_tokens(&tokens), Ok(Value::Scalar(6.0)));
    }

    #[test]
    fn unary_minus_pops_one_operand() {
        let tokens = [Token::Number(3.0), Token::Operator(Operator::UnaryMinus)];

        assert_eq!(execute_tokens(&tokens), Ok(Value::Scalar(-3.0)));
    }

    #[test]
    fn leftover_operands_fail_fast() {
        let tokens = [Token::Number(1.0), Token::Number(2.0)];

        assert_eq!(execute_tokens(&tokens),
                   Err(RuntimeError::StackImbalance { depth: 2 }));
    }

    #[test]
    fn empty_programs_fail_fast() {
        assert_eq!(execute_tokens(&[]), Err(RuntimeError::StackImbalance { depth: 0 }));
    }

    #[test]
    fn missing_operands_fail_fast() {
        let tokens = [Token::Number(1.0), Token::Operator(Operator::Plus)];

        assert_eq!(execute_tokens(&tokens), Err(RuntimeError::StackUnderflow));
    }
}

use crate::interpreter::{
    compiler::token::Operator,
    evaluator::{binary::power, core::EvalResult},
    value::core::Value,
};

/// Evaluates a binary operation between two values.
///
/// Routes the operation to the handler for the given operator. `UnaryMinus`
/// is not a binary operator and is handled by the stack machine before this
/// function is reached.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use numera::interpreter::{
///     compiler::token::Operator,
///     evaluator::binary::core::eval_binary,
///     value::core::Value,
/// };
///
/// let r = eval_binary(Operator::Multiply, &Value::Scalar(3.0), &Value::Scalar(4.0));
/// assert_eq!(r.unwrap(), Value::Scalar(12.0));
/// ```
pub fn eval_binary(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        Operator::Plus => eval_add(left, right),
        Operator::Minus => eval_sub(left, right),
        Operator::Multiply => eval_mul(left, right),
        Operator::Divide => eval_div(left, right),
        Operator::Power => power::eval_pow(left, right),
        Operator::UnaryMinus => unreachable!(),
    }
}

/// Adds two values.
///
/// All four shape combinations are enumerated explicitly: scalar with
/// scalar, vector with vector (equal lengths required), and a scalar
/// broadcast across either side of a vector. The other binary operators
/// below follow the same scheme.
///
/// # Errors
/// Returns a length-mismatch error for vectors of different lengths.
pub fn eval_add(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a + b)),
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a.zip_map(b, |x, y| x + y)?)),
        (Value::Scalar(a), Value::Vector(b)) => Ok(Value::Vector(b.map(|y| a + y))),
        (Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a.map(|x| x + b))),
    }
}

/// Subtracts `right` from `left`.
pub fn eval_sub(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a - b)),
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a.zip_map(b, |x, y| x - y)?)),
        (Value::Scalar(a), Value::Vector(b)) => Ok(Value::Vector(b.map(|y| a - y))),
        (Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a.map(|x| x - b))),
    }
}

/// Multiplies two values.
pub fn eval_mul(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a * b)),
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a.zip_map(b, |x, y| x * y)?)),
        (Value::Scalar(a), Value::Vector(b)) => Ok(Value::Vector(b.map(|y| a * y))),
        (Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a.map(|x| x * b))),
    }
}

/// Divides `left` by `right`.
///
/// Division follows IEEE semantics: dividing by zero yields an infinity or
/// NaN that propagates through the rest of the evaluation.
pub fn eval_div(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a / b)),
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a.zip_map(b, |x, y| x / y)?)),
        (Value::Scalar(a), Value::Vector(b)) => Ok(Value::Vector(b.map(|y| a / y))),
        (Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a.map(|x| x / b))),
    }
}

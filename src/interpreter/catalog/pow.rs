use crate::interpreter::{
    catalog::core::{FunctionError, broadcast_binary, check_arity},
    value::core::Value,
};

/// Raises `args[0]` to the power `args[1]`.
///
/// Scalars broadcast across a vector operand; two vectors must have equal
/// lengths.
///
/// # Example
/// ```
/// use numera::interpreter::{catalog::pow::pow, value::core::Value};
///
/// let r = pow(&[Value::Scalar(2.0), Value::Scalar(3.0)]).unwrap();
/// assert_eq!(r, Value::Scalar(8.0));
/// ```
pub fn pow(args: &[Value]) -> Result<Value, FunctionError> {
    check_arity(args, 2)?;

    broadcast_binary(&args[0], &args[1], f64::powf)
}

use crate::interpreter::{
    catalog::core::{FunctionError, broadcast_binary},
    value::core::Value,
};

/// Computes the arc tangent of a value.
///
/// - With one argument: the plain arc tangent, elementwise on vectors.
/// - With two arguments: the two-argument arc tangent of `y / x`, taking the
///   arguments in `(y, x)` order. Scalars broadcast across a vector operand;
///   two vectors must have equal lengths.
///
/// # Example
/// ```
/// use numera::interpreter::{catalog::arctan::arctan, value::core::Value};
///
/// let r = arctan(&[Value::Scalar(1.0), Value::Scalar(1.0)]).unwrap();
/// assert_eq!(r, Value::Scalar(std::f64::consts::FRAC_PI_4));
/// ```
pub fn arctan(args: &[Value]) -> Result<Value, FunctionError> {
    match args.len() {
        1 => match &args[0] {
            Value::Scalar(x) => Ok(Value::Scalar(x.atan())),
            Value::Vector(v) => Ok(Value::Vector(v.map(f64::atan))),
        },
        2 => broadcast_binary(&args[0], &args[1], f64::atan2),
        _ => Err(FunctionError::WrongParameterCount),
    }
}

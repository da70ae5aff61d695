use crate::interpreter::{
    catalog::core::{FunctionError, broadcast_binary},
    value::core::Value,
};

/// Computes logarithms.
///
/// - With one argument: the natural logarithm, elementwise on vectors.
/// - With two arguments: the logarithm of `args[0]` with respect to the base
///   `args[1]`. Scalars broadcast across a vector operand; two vectors must
///   have equal lengths.
///
/// Domains follow IEEE semantics: zero and negative inputs produce
/// `-inf`/NaN rather than an error.
///
/// # Example
/// ```
/// use numera::interpreter::{catalog::log::log, value::core::Value};
///
/// let r = log(&[Value::Scalar(8.0), Value::Scalar(2.0)]).unwrap();
/// assert_eq!(r, Value::Scalar(3.0));
/// ```
pub fn log(args: &[Value]) -> Result<Value, FunctionError> {
    match args.len() {
        1 => match &args[0] {
            Value::Scalar(x) => Ok(Value::Scalar(x.ln())),
            Value::Vector(v) => Ok(Value::Vector(v.map(f64::ln))),
        },
        2 => broadcast_binary(&args[0], &args[1], f64::log),
        _ => Err(FunctionError::WrongParameterCount),
    }
}

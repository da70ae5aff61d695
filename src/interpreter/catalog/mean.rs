use crate::interpreter::{
    catalog::core::{FunctionError, check_arity},
    value::core::Value,
};

/// Returns the NaN-skipping arithmetic mean of a vector.
///
/// Only a vector argument is meaningful; a scalar is a
/// [`FunctionError::WrongArgumentType`]. NaN elements are neither summed nor
/// counted, so the divisor is the number of non-NaN elements.
///
/// # Example
/// ```
/// use numera::interpreter::{
///     catalog::mean::mean,
///     value::{core::Value, vector::VectorValue},
/// };
///
/// let v = Value::Vector(VectorValue::new(vec![1.0, f64::NAN, 3.0]));
/// assert_eq!(mean(&[v]), Ok(Value::Scalar(2.0)));
/// ```
pub fn mean(args: &[Value]) -> Result<Value, FunctionError> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Vector(v) => Ok(Value::Scalar(v.mean())),
        Value::Scalar(_) => Err(FunctionError::WrongArgumentType),
    }
}

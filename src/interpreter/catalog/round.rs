use crate::{
    interpreter::{
        catalog::core::FunctionError,
        value::core::Value,
    },
    util::num::f64_to_i32_checked,
};

/// Rounds a value to the nearest integer, or to a number of decimal digits.
///
/// - With one argument: rounds to the nearest integer, elementwise on
///   vectors.
/// - With two arguments: rounds `args[0]` to `args[1]` decimal digits. The
///   digit count must be a non-negative integral scalar; anything else is a
///   [`FunctionError::WrongArgumentType`].
///
/// # Example
/// ```
/// use numera::interpreter::{catalog::round::round, value::core::Value};
///
/// let r = round(&[Value::Scalar(3.14159), Value::Scalar(2.0)]).unwrap();
/// assert_eq!(r, Value::Scalar(3.14));
/// ```
pub fn round(args: &[Value]) -> Result<Value, FunctionError> {
    match args.len() {
        1 => match &args[0] {
            Value::Scalar(x) => Ok(Value::Scalar(x.round())),
            Value::Vector(v) => Ok(Value::Vector(v.map(f64::round))),
        },
        2 => {
            let digits = match &args[1] {
                Value::Scalar(d) => f64_to_i32_checked(*d, FunctionError::WrongArgumentType)?,
                Value::Vector(_) => return Err(FunctionError::WrongArgumentType),
            };
            if digits < 0 {
                return Err(FunctionError::WrongArgumentType);
            }

            let factor = 10f64.powi(digits);
            match &args[0] {
                Value::Scalar(x) => Ok(Value::Scalar((x * factor).round() / factor)),
                Value::Vector(v) => Ok(Value::Vector(v.map(|x| (x * factor).round() / factor))),
            }
        },
        _ => Err(FunctionError::WrongParameterCount),
    }
}

#[cfg(test)]
mod tests {
    use super::round;
    use crate::interpreter::{
        catalog::core::FunctionError,
        value::{core::Value, vector::VectorValue},
    };

    #[test]
    fn rounds_vectors_to_digits() {
        let v = Value::Vector(VectorValue::new(vec![1.25, -0.875]));
        let r = round(&[v, Value::Scalar(1.0)]).unwrap();

        assert_eq!(r, Value::Vector(VectorValue::new(vec![1.3, -0.9])));
    }

    #[test]
    fn rejects_fractional_or_negative_digit_counts() {
        assert_eq!(round(&[Value::Scalar(1.0), Value::Scalar(0.5)]),
                   Err(FunctionError::WrongArgumentType));
        assert_eq!(round(&[Value::Scalar(1.0), Value::Scalar(-1.0)]),
                   Err(FunctionError::WrongArgumentType));
    }
}

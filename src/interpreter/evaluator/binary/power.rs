use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Evaluates an exponentiation operation.
///
/// All four shape combinations are enumerated explicitly; both vector
/// operands must have equal lengths. The scalar kernel is `f64::powf`.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
///
/// # Returns
/// An `EvalResult<Value>` containing the result of `base ^ exponent`.
///
/// # Example
/// ```
/// use numera::interpreter::{evaluator::binary::power::eval_pow, value::core::Value};
///
/// let r = eval_pow(&Value::Scalar(2.0), &Value::Scalar(10.0)).unwrap();
/// assert_eq!(r, Value::Scalar(1024.0));
/// ```
pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
    match (base, exponent) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a.powf(*b))),
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a.zip_map(b, f64::powf)?)),
        (Value::Scalar(a), Value::Vector(b)) => Ok(Value::Vector(b.map(|y| a.powf(y)))),
        (Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a.map(|x| x.powf(*b)))),
    }
}

#[cfg(test)]
mod tests {
    use super::eval_pow;
    use crate::interpreter::value::{core::Value, vector::VectorValue};

    #[test]
    fn vector_bases_raise_elementwise() {
        let v = Value::Vector(VectorValue::new(vec![1.0, 2.0, 3.0]));
        let r = eval_pow(&v, &Value::Scalar(2.0)).unwrap();

        assert_eq!(r, Value::Vector(VectorValue::new(vec![1.0, 4.0, 9.0])));
    }
}

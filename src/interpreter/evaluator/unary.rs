use crate::interpreter::value::core::Value;

/// Negates a value arithmetically.
///
/// A scalar is negated directly; a vector is negated elementwise. Negation
/// cannot fail, so the result is returned without a `Result` wrapper.
///
/// # Example
/// ```
/// use numera::interpreter::{evaluator::unary::eval_negate, value::core::Value};
///
/// let v = eval_negate(&Value::Scalar(2.5));
/// assert_eq!(v, Value::Scalar(-2.5));
/// ```
#[must_use]
pub fn eval_negate(value: &Value) -> Value {
    match value {
        Value::Scalar(x) => Value::Scalar(-x),
        Value::Vector(v) => Value::Vector(v.map(|x| -x)),
    }
}

#[cfg(test)]
mod tests {
    use super::eval_negate;
    use crate::interpreter::value::{core::Value, vector::VectorValue};

    #[test]
    fn vectors_negate_elementwise() {
        let v = Value::Vector(VectorValue::new(vec![1.0, -2.0, 0.0]));

        assert_eq!(eval_negate(&v),
                   Value::Vector(VectorValue::new(vec![-1.0, 2.0, 0.0])));
    }
}

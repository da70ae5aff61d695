use crate::interpreter::{
    catalog::core::{FunctionError, check_arity},
    value::core::Value,
};

/// Generates a one-argument builtin applying a scalar math routine.
///
/// The generated functions accept exactly one argument.
/// - A scalar applies the routine directly.
/// - A vector applies the routine to every element.
macro_rules! elementwise_builtin {
    ($fname:ident, $op:ident) => {
        pub fn $fname(args: &[Value]) -> Result<Value, FunctionError> {
            check_arity(args, 1)?;

            match &args[0] {
                Value::Scalar(x) => Ok(Value::Scalar(x.$op())),
                Value::Vector(v) => Ok(Value::Vector(v.map(f64::$op))),
            }
        }
    };
}

elementwise_builtin!(abs, abs);
elementwise_builtin!(arccos, acos);
elementwise_builtin!(arcsin, asin);
elementwise_builtin!(ceiling, ceil);
elementwise_builtin!(cos, cos);
elementwise_builtin!(cosh, cosh);
elementwise_builtin!(exp, exp);
elementwise_builtin!(floor, floor);
elementwise_builtin!(log10, log10);
elementwise_builtin!(sin, sin);
elementwise_builtin!(sinh, sinh);
elementwise_builtin!(sqrt, sqrt);
elementwise_builtin!(tan, tan);
elementwise_builtin!(tanh, tanh);
elementwise_builtin!(to_deg, to_degrees);
elementwise_builtin!(to_rad, to_radians);
elementwise_builtin!(truncate, trunc);

#[cfg(test)]
mod tests {
    use super::{ceiling, sqrt, to_deg, truncate};
    use crate::interpreter::value::{core::Value, vector::VectorValue};

    #[test]
    fn scalar_arguments_apply_directly() {
        assert_eq!(sqrt(&[Value::Scalar(16.0)]), Ok(Value::Scalar(4.0)));
        assert_eq!(truncate(&[Value::Scalar(-2.7)]), Ok(Value::Scalar(-2.0)));
        assert_eq!(to_deg(&[Value::Scalar(std::f64::consts::PI)]), Ok(Value::Scalar(180.0)));
    }

    #[test]
    fn vector_arguments_apply_elementwise() {
        let v = Value::Vector(VectorValue::new(vec![1.2, 2.5, -0.5]));

        assert_eq!(ceiling(&[v]),
                   Ok(Value::Vector(VectorValue::new(vec![2.0, 3.0, -0.0]))));
    }
}

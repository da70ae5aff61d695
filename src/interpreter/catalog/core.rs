use crate::interpreter::{
    catalog::{arctan, builtin, log, mean, pow, round},
    value::core::Value,
};

/// The ways a function call can fail inside the catalog.
///
/// The compiler converts these into positioned diagnostics carrying the
/// function name and the column of the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionError {
    /// The catalog has no function with the given name.
    UndefinedFunction,
    /// The function exists but does not accept this number of arguments.
    WrongParameterCount,
    /// The function exists but does not accept this argument shape.
    WrongArgumentType,
}

/// Dispatches function calls by name over evaluated argument values.
///
/// Implemented by [`Builtins`] for the fixed catalog; a host can substitute
/// its own implementation to extend or replace the function set.
pub trait FunctionCatalog {
    /// Calls the function `name` with the given arguments.
    ///
    /// # Errors
    /// Returns a [`FunctionError`] classifying the failure.
    fn call(&self, name: &str, args: &[Value]) -> Result<Value, FunctionError>;
}

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns the
/// result value or a classified failure.
type BuiltinFn = fn(&[Value]) -> Result<Value, FunctionError>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name (matched case-insensitively),
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"      => { arity: Arity::Exact(1), func: builtin::abs },
    "arccos"   => { arity: Arity::Exact(1), func: builtin::arccos },
    "arcsin"   => { arity: Arity::Exact(1), func: builtin::arcsin },
    "arctan"   => { arity: Arity::OneOf(&[1, 2]), func: arctan::arctan },
    "ceiling"  => { arity: Arity::Exact(1), func: builtin::ceiling },
    "cos"      => { arity: Arity::Exact(1), func: builtin::cos },
    "cosh"     => { arity: Arity::Exact(1), func: builtin::cosh },
    "exp"      => { arity: Arity::Exact(1), func: builtin::exp },
    "floor"    => { arity: Arity::Exact(1), func: builtin::floor },
    "log"      => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "log10"    => { arity: Arity::Exact(1), func: builtin::log10 },
    "mean"     => { arity: Arity::Exact(1), func: mean::mean },
    "pow"      => { arity: Arity::Exact(2), func: pow::pow },
    "round"    => { arity: Arity::OneOf(&[1, 2]), func: round::round },
    "sin"      => { arity: Arity::Exact(1), func: builtin::sin },
    "sinh"     => { arity: Arity::Exact(1), func: builtin::sinh },
    "sqrt"     => { arity: Arity::Exact(1), func: builtin::sqrt },
    "tan"      => { arity: Arity::Exact(1), func: builtin::tan },
    "tanh"     => { arity: Arity::Exact(1), func: builtin::tanh },
    "toDeg"    => { arity: Arity::Exact(1), func: builtin::to_deg },
    "toRad"    => { arity: Arity::Exact(1), func: builtin::to_rad },
    "truncate" => { arity: Arity::Exact(1), func: builtin::truncate },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

/// The fixed builtin function catalog.
///
/// Function names are matched case-insensitively. Every function that is
/// valid on a scalar is valid elementwise on a vector; the binary math
/// functions additionally broadcast a scalar across a vector operand.
///
/// # Example
/// ```
/// use numera::interpreter::{
///     catalog::core::{Builtins, FunctionCatalog},
///     value::core::Value,
/// };
///
/// let result = Builtins.call("sqrt", &[Value::Scalar(4.0)]).unwrap();
/// assert_eq!(result, Value::Scalar(2.0));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Builtins;

impl FunctionCatalog for Builtins {
    fn call(&self, name: &str, args: &[Value]) -> Result<Value, FunctionError> {
        let Some(builtin) = BUILTIN_TABLE.iter()
                                         .find(|b| b.name.eq_ignore_ascii_case(name))
        else {
            return Err(FunctionError::UndefinedFunction);
        };

        if !builtin.arity.check(args.len()) {
            return Err(FunctionError::WrongParameterCount);
        }
        (builtin.func)(args)
    }
}

/// Ensures that exactly `expected` arguments were supplied.
///
/// # Errors
/// Returns [`FunctionError::WrongParameterCount`] otherwise.
pub(crate) fn check_arity(args: &[Value], expected: usize) -> Result<(), FunctionError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(FunctionError::WrongParameterCount)
    }
}

/// Applies a binary scalar function over every shape combination.
///
/// A scalar operand is broadcast across a vector operand; two vectors
/// combine elementwise and must have equal lengths, otherwise the call fails
/// as [`FunctionError::WrongArgumentType`].
pub(crate) fn broadcast_binary<F>(x: &Value, y: &Value, f: F) -> Result<Value, FunctionError>
    where F: Fn(f64, f64) -> f64
{
    match (x, y) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(f(*a, *b))),
        (Value::Vector(a), Value::Scalar(b)) => Ok(Value::Vector(a.map(|e| f(e, *b)))),
        (Value::Scalar(a), Value::Vector(b)) => Ok(Value::Vector(b.map(|e| f(*a, e)))),
        (Value::Vector(a), Value::Vector(b)) => {
            a.zip_map(b, f)
             .map(Value::Vector)
             .map_err(|_| FunctionError::WrongArgumentType)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{BUILTIN_FUNCTIONS, Builtins, FunctionCatalog, FunctionError};
    use crate::interpreter::value::core::Value;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Builtins.call("SQRT", &[Value::Scalar(9.0)]), Ok(Value::Scalar(3.0)));
        assert_eq!(Builtins.call("ToDeg", &[Value::Scalar(0.0)]), Ok(Value::Scalar(0.0)));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Builtins.call("nope", &[]), Err(FunctionError::UndefinedFunction));
    }

    #[test]
    fn arity_is_checked_before_dispatch() {
        assert_eq!(Builtins.call("sqrt", &[]), Err(FunctionError::WrongParameterCount));
        assert_eq!(Builtins.call("arctan",
                                 &[Value::Scalar(1.0), Value::Scalar(1.0), Value::Scalar(1.0)]),
                   Err(FunctionError::WrongParameterCount));
    }

    #[test]
    fn every_catalog_entry_is_listed() {
        assert!(BUILTIN_FUNCTIONS.contains(&"mean"));
        assert_eq!(BUILTIN_FUNCTIONS.len(), 22);
    }
}

use crate::interpreter::value::vector::VectorValue;

/// Represents an operand or result in the expression language.
///
/// The domain is closed over exactly two shapes: a scalar number and a
/// fixed-length numeric vector. Binary operations between the shapes follow
/// broadcasting rules: a scalar combined with a vector is applied to every
/// element, while two vectors combine elementwise and must have equal
/// lengths.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A scalar number (double precision floating-point).
    Scalar(f64),
    /// A fixed-length vector of `f64` elements.
    Vector(VectorValue),
}

impl Value {
    /// Returns `true` if the value is [`Scalar`].
    ///
    /// [`Scalar`]: Value::Scalar
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(..))
    }

    /// Returns `true` if the value is [`Vector`].
    ///
    /// [`Vector`]: Value::Vector
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(..))
    }

    /// Returns the scalar value, if this is a scalar.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(x) => Some(*x),
            Self::Vector(_) => None,
        }
    }

    /// Returns a reference to the vector value, if this is a vector.
    #[must_use]
    pub const fn as_vector(&self) -> Option<&VectorValue> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<VectorValue> for Value {
    fn from(v: VectorValue) -> Self {
        Self::Vector(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(VectorValue::new(v))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(x) => write!(f, "{x}"),
            Self::Vector(v) => write!(f, "{v}"),
        }
    }
}

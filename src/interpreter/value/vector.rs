use std::sync::{Arc, OnceLock};

use ordered_float::OrderedFloat;

use crate::error::RuntimeError;

/// An immutable, fixed-length sequence of `f64` elements.
///
/// The length is fixed at construction and never changes in place. Cloning
/// shares the underlying storage. Equality is value-wise over the elements
/// using IEEE comparison, so a vector containing NaN is never equal to
/// anything, including itself.
///
/// A structural hash over the contents is computed lazily on first use and
/// cached; two vectors whose cached hashes differ are known to be unequal
/// without comparing elements. The cache is a write-once cell, so vectors
/// stay safe to share across threads after construction.
#[derive(Debug, Clone)]
pub struct VectorValue {
    data: Arc<[f64]>,
    hash: OnceLock<OrderedFloat<f64>>,
}

impl VectorValue {
    /// Creates a vector from its elements.
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data: data.into(),
               hash: OnceLock::new(), }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the structural hash of the contents.
    ///
    /// The hash is the running polynomial `h = 13; h = h * 7 + x` over the
    /// raw element values, computed once and cached. It is consistent with
    /// equality (equal vectors produce equal hashes) and is used purely as an
    /// in-memory equality short-circuit; no stability across processes is
    /// promised.
    #[must_use]
    pub fn structural_hash(&self) -> f64 {
        self.hash
            .get_or_init(|| {
                let mut result = 13.0;
                for x in self.data.iter() {
                    result = result * 7.0 + x;
                }
                OrderedFloat(result)
            })
            .into_inner()
    }

    /// Applies `f` to every element and returns the resulting vector.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::vector::VectorValue;
    ///
    /// let v = VectorValue::new(vec![1.0, 4.0, 9.0]);
    /// assert_eq!(v.map(f64::sqrt), VectorValue::new(vec![1.0, 2.0, 3.0]));
    /// ```
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
        where F: Fn(f64) -> f64
    {
        Self::new(self.data.iter().map(|x| f(*x)).collect())
    }

    /// Combines two vectors elementwise with `f`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::LengthMismatch`] if the lengths differ.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::vector::VectorValue;
    ///
    /// let a = VectorValue::new(vec![1.0, 2.0]);
    /// let b = VectorValue::new(vec![10.0, 20.0]);
    ///
    /// let sum = a.zip_map(&b, |x, y| x + y).unwrap();
    /// assert_eq!(sum, VectorValue::new(vec![11.0, 22.0]));
    /// ```
    pub fn zip_map<F>(&self, other: &Self, f: F) -> Result<Self, RuntimeError>
        where F: Fn(f64, f64) -> f64
    {
        if self.len() != other.len() {
            return Err(RuntimeError::LengthMismatch { left:  self.len(),
                                                      right: other.len(), });
        }
        Ok(Self::new(self.data
                         .iter()
                         .zip(other.data.iter())
                         .map(|(x, y)| f(*x, *y))
                         .collect()))
    }

    /// Sums the elements, skipping NaN entries.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().filter(|x| !x.is_nan()).sum()
    }

    /// Returns the arithmetic mean of the non-NaN elements.
    ///
    /// NaN entries are neither summed nor counted, so the divisor is the
    /// number of non-NaN elements. A vector without any non-NaN element
    /// yields NaN.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::vector::VectorValue;
    ///
    /// let v = VectorValue::new(vec![1.0, f64::NAN, 3.0]);
    /// assert_eq!(v.mean(), 2.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;

        for x in self.data.iter() {
            if !x.is_nan() {
                sum += x;
                count += 1;
            }
        }

        sum / count as f64
    }
}

impl PartialEq for VectorValue {
    fn eq(&self, other: &Self) -> bool {
        // Exploit two already-cached differing hashes.
        if let (Some(a), Some(b)) = (self.hash.get(), other.hash.get()) {
            if a != b {
                return false;
            }
        }

        if self.len() != other.len() {
            return false;
        }

        self.data.iter().zip(other.data.iter()).all(|(x, y)| x == y)
    }
}

impl From<Vec<f64>> for VectorValue {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl std::fmt::Display for VectorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (index, value) in self.data.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{value}")?;
        }

        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::VectorValue;

    #[test]
    fn equality_is_value_wise() {
        let a = VectorValue::new(vec![1.0, 2.0, 3.0]);
        let b = VectorValue::new(vec![1.0, 2.0, 3.0]);
        let c = VectorValue::new(vec![1.0, 2.0, 4.0]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, VectorValue::new(vec![1.0, 2.0]));
    }

    #[test]
    fn equal_vectors_hash_equally() {
        let a = VectorValue::new(vec![0.5, -2.0, 7.25]);
        let b = VectorValue::new(vec![0.5, -2.0, 7.25]);

        assert_eq!(a.structural_hash().to_bits(), b.structural_hash().to_bits());
    }

    #[test]
    fn cached_hashes_do_not_break_equality() {
        let a = VectorValue::new(vec![1.0, 2.0]);
        let b = VectorValue::new(vec![1.0, 2.0]);

        // Force both caches before comparing.
        let _ = a.structural_hash();
        let _ = b.structural_hash();

        assert_eq!(a, b);
    }

    #[test]
    fn nan_elements_make_vectors_unequal() {
        let a = VectorValue::new(vec![1.0, f64::NAN]);
        let b = VectorValue::new(vec![1.0, f64::NAN]);

        assert_ne!(a, b);
        assert_ne!(a, a.clone());
    }

    #[test]
    fn sum_and_mean_skip_nan() {
        let v = VectorValue::new(vec![1.0, f64::NAN, 3.0, f64::NAN]);

        assert_eq!(v.sum(), 4.0);
        assert_eq!(v.mean(), 2.0);
    }

    #[test]
    fn mean_of_all_nan_is_nan() {
        let v = VectorValue::new(vec![f64::NAN, f64::NAN]);

        assert!(v.mean().is_nan());
    }
}

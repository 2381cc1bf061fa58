//!
//! Equality predicates that a `SparseMapVector` can be configured with
//!

///
/// Equality of two values of type `T`
///
/// Implemented by `EqualTo` (uses `PartialEq`) and by any closure or function
/// `Fn(&T, &T) -> bool`.
///
pub trait EqualCompare<T> {
    fn equal(&self, a: &T, b: &T) -> bool;
}

/// `a == b` by `PartialEq`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualTo;

impl<T: PartialEq> EqualCompare<T> for EqualTo {
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T, F> EqualCompare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_to() {
        assert!(EqualTo.equal(&1u32, &1u32));
        assert!(!EqualTo.equal(&1u32, &2u32));
        assert!(!EqualTo.equal(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn equal_closure() {
        let tolerant = |a: &f64, b: &f64| (a - b).abs() < 1e-3;
        assert!(tolerant.equal(&1.0, &1.0001));
        assert!(!tolerant.equal(&1.0, &1.1));
    }
}

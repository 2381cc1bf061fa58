//!
//! Comparing two sparse vectors by their logical values
//!
use super::SparseMapVector;
use approx::AbsDiffEq;
use itertools::Itertools;

impl<T, E> SparseMapVector<T, E> {
    ///
    /// Indices stored in either vector, ascending and without duplicates.
    ///
    /// Any index outside of this set reads the zero value in both vectors.
    ///
    pub fn diff_indexes<'a, F>(
        &'a self,
        other: &'a SparseMapVector<T, F>,
    ) -> impl Iterator<Item = usize> + 'a {
        self.iter()
            .map(|(i, _)| i)
            .merge(other.iter().map(|(i, _)| i))
            .dedup()
    }
}

/// Logical equality: same size, same zero value and the same value at every
/// index. Whether an index is stored does not matter.
impl<T: PartialEq, E> PartialEq for SparseMapVector<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.zero_value() == other.zero_value()
            && self
                .diff_indexes(other)
                .all(|i| self.read(i) == other.read(i))
    }
}

impl<T, E> AbsDiffEq for SparseMapVector<T, E>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.size() == other.size()
            && self.zero_value().abs_diff_eq(other.zero_value(), epsilon)
            && self
                .diff_indexes(other)
                .all(|i| self.read(i).abs_diff_eq(other.read(i), epsilon))
    }
}

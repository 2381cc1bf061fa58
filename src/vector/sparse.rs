//!
//! `SparseMapVector` as a backend storage of `Vector`
//!
use super::{IterableStorage, Storage};
use crate::sparse_array::SparseMapVector;
use std::collections::btree_map;

/// `get` never stores an index. `get_mut` always does.
impl<T, E> Storage for SparseMapVector<T, E>
where
    T: Clone,
    E: Clone + Default,
{
    type Item = T;
    fn new(size: usize, default_value: T) -> SparseMapVector<T, E> {
        SparseMapVector::with_eq_comp(size, default_value, E::default())
    }
    #[inline(always)]
    fn size(&self) -> usize {
        SparseMapVector::size(self)
    }
    fn get(&self, index: usize) -> &T {
        self.read(index)
    }
    fn get_mut(&mut self, index: usize) -> &mut T {
        self.writable_ref(index)
    }
    fn is_dense() -> bool {
        false
    }
}

impl<'a, T, E> IterableStorage<'a> for SparseMapVector<T, E>
where
    T: Clone + 'a,
    E: Clone + Default + 'a,
{
    type IndexIterator = SparseStorageIterator<'a, T>;
    fn indexiter(&'a self) -> Self::IndexIterator {
        SparseStorageIterator {
            inner: self.entries(),
        }
    }
}

/// Iterator on the stored (index, item) of SparseMapVector
pub struct SparseStorageIterator<'a, T> {
    inner: btree_map::Iter<'a, usize, T>,
}

impl<'a, T: Clone> Iterator for SparseStorageIterator<'a, T> {
    type Item = (usize, T);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&index, value)| (index, value.clone()))
    }
}

//!
//! `Vector` Wrapper of fixed size table
//!
//! Code that only needs "a fixed-size table readable/writable by index" is
//! written against `Storage`, so that it can run on a `DenseStorage` or on a
//! `SparseMapVector` without change.
//!
use std::ops::{Index, IndexMut};
pub mod dense;
pub mod index;
pub mod sparse;
pub mod test;
pub use dense::DenseStorage;
pub use index::Indexable;
use crate::sparse_array::{SparseMapVector, SparseReturnProxy};
use std::marker::PhantomData;

/// Backend storage of `Vector`
/// an abstruction of a vec with fixed size that is readable/writable
/// by index.
///
/// * `new`
///     create storage with fixed size and filled with the default value
/// * `size`
///     get the fixed size
/// * `get`
///     get the reference to the value in the index
/// * `get_mut`
///     get the mutable reference to the value in the index
///
pub trait Storage: Clone + Sized {
    /// Item type that this storage stores.
    ///
    type Item: Clone;
    ///
    /// Create a new storage with fixed size and filled with the default value
    fn new(size: usize, default_value: Self::Item) -> Self;
    ///
    /// Get the size of this storage
    fn size(&self) -> usize;
    ///
    /// Get the reference to the value at the given index
    fn get(&self, index: usize) -> &Self::Item;
    ///
    /// Get the mutable reference to the given index
    fn get_mut(&mut self, index: usize) -> &mut Self::Item;
    ///
    /// Check if this is dense storage or not
    fn is_dense() -> bool;
}

///
/// Storage that can enumerate its `(index, value)`.
///
/// A dense storage yields every index, a sparse one only the stored indices.
pub trait IterableStorage<'a>: Storage {
    type IndexIterator: Iterator<Item = (usize, Self::Item)>;
    fn indexiter(&'a self) -> Self::IndexIterator;
}

/// `Vector` struct
///
/// It generalized of
///
/// 1. item type `Storage::Item`
/// 2. backend storage `S: Storage`
/// 3. index type `Ix: Indexable`
///
#[derive(Clone, Debug)]
pub struct Vector<S: Storage, Ix: Indexable = usize> {
    /// Backend storage of the Vector
    storage: S,
    /// Hidden marker of index type
    ty: PhantomData<Ix>,
}

impl<S: Storage, Ix: Indexable> Vector<S, Ix> {
    /// Create a new Vector, with fixed size and filled by default_value.
    pub fn new(size: usize, default_value: S::Item) -> Vector<S, Ix> {
        Vector {
            storage: S::new(size, default_value),
            ty: PhantomData,
        }
    }
    /// Wrap an existing storage.
    pub fn from_storage(storage: S) -> Vector<S, Ix> {
        Vector {
            storage,
            ty: PhantomData,
        }
    }
    /// Create a Vector whose `(index, value)` are set.
    pub fn from_vec(
        size: usize,
        default_value: S::Item,
        pairs: &[(Ix, S::Item)],
    ) -> Vector<S, Ix> {
        let mut v = Vector::new(size, default_value);
        for (index, value) in pairs {
            v[*index] = value.clone();
        }
        v
    }
    /// Get an (virtual) size of the storage
    pub fn len(&self) -> usize {
        self.storage.size()
    }
    /// Backend storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
    /// Get an iterator on (index, item).
    pub fn iter<'a>(&'a self) -> impl 'a + Iterator<Item = (Ix, S::Item)>
    where
        S: IterableStorage<'a>,
    {
        self.storage.indexiter().map(|(i, v)| (Ix::new(i), v))
    }
    /// Convert into `Vec` of length `self.len()`
    pub fn to_vec(&self) -> Vec<S::Item> {
        (0..self.len()).map(|i| self.storage.get(i).clone()).collect()
    }
    /// Convert to the DenseStorage-backed vector.
    pub fn to_dense(&self) -> Vector<DenseStorage<S::Item>, Ix> {
        Vector {
            storage: DenseStorage::from(self.to_vec()),
            ty: PhantomData,
        }
    }
    ///
    /// Convert to the SparseMapVector-backed vector.
    ///
    /// Only the items not equal to `default_value` are stored.
    pub fn to_sparse(&self, default_value: S::Item) -> Vector<SparseMapVector<S::Item>, Ix>
    where
        S::Item: PartialEq,
    {
        let pairs: Vec<(usize, S::Item)> = (0..self.len())
            .map(|i| (i, self.storage.get(i).clone()))
            .filter(|(_, v)| *v != default_value)
            .collect();
        Vector {
            storage: SparseMapVector::from_pairs(self.len(), pairs, default_value),
            ty: PhantomData,
        }
    }
    pub fn is_dense(&self) -> bool {
        S::is_dense()
    }
}

impl<T: Clone, E: Clone + Default, Ix: Indexable> Vector<SparseMapVector<T, E>, Ix> {
    /// Element handle, see `SparseMapVector::at`
    pub fn at(&mut self, index: Ix) -> SparseReturnProxy<'_, T, E> {
        self.storage.at(index.index())
    }
}

/// Implement index access, vec[i]
impl<S: Storage, Ix: Indexable> Index<Ix> for Vector<S, Ix> {
    type Output = S::Item;
    fn index(&self, index: Ix) -> &Self::Output {
        self.storage.get(index.index())
    }
}

/// Implement index write access, vec[i] = 10
///
/// On a sparse backend this always stores the index. Use `Vector::at` to
/// avoid storing on `*=` and `/=`.
impl<S: Storage, Ix: Indexable> IndexMut<Ix> for Vector<S, Ix> {
    fn index_mut(&mut self, index: Ix) -> &mut Self::Output {
        self.storage.get_mut(index.index())
    }
}

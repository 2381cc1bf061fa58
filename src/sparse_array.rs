//!
//! `SparseMapVector` fixed-size vector whose elements are mostly a default value
//!
//! Only the indices that were written (or mutated in a way that needs storage)
//! are kept in an ordered map. Every other index reads the single stored
//! `zero_value`.
//!
//! ```
//! use sparsearray::sparse_array::SparseMapVector;
//!
//! let mut v: SparseMapVector<i32> = SparseMapVector::new(10, 0);
//! v.at(3).set(5);
//! v.at(4).increment();
//! let mut e = v.at(8);
//! e *= 2; // absent index, so nothing is stored
//! assert_eq!(v[3], 5);
//! assert_eq!(v[4], 1);
//! assert_eq!(v[8], 0);
//! assert_eq!(v.n_entries(), 2);
//! ```
//!
pub mod compare;
pub mod diff;
pub mod proxy;
pub use compare::{EqualCompare, EqualTo};
pub use proxy::SparseReturnProxy;

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;
use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::ops::Index;

/// Sparse vector backed by `BTreeMap<usize, T>`
///
/// * `size` is the virtual length. It is never checked against the stored
///   indices, so reading or writing at `index >= size` behaves like any other
///   index.
/// * `zero_value` is the value of every index without an entry.
/// * `eq_comp` is kept as a part of the configuration. Mutations never consult
///   it, so an entry whose value becomes equal to `zero_value` stays stored.
#[derive(Debug, Clone)]
pub struct SparseMapVector<T, E = EqualTo> {
    /// virtual size
    size: usize,
    /// stored entries `index -> value`
    storage: BTreeMap<usize, T>,
    /// value of unstored indices
    zero_value: T,
    /// equality predicate on values
    eq_comp: E,
}

impl<T> SparseMapVector<T, EqualTo> {
    /// Create an empty sparse vector with the default equality comparator.
    pub fn new(size: usize, zero_value: T) -> Self {
        Self::with_eq_comp(size, zero_value, EqualTo)
    }
    /// Create from `(index, value)` pairs.
    ///
    /// If an index appears more than once, the first pair is kept and the rest
    /// are discarded.
    pub fn from_pairs<I>(size: usize, pairs: I, zero_value: T) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        Self::from_pairs_with_eq_comp(size, pairs, zero_value, EqualTo)
    }
    /// Create from parallel sequences of indices and values.
    ///
    /// The two sequences are zipped by position, then duplicated indices are
    /// resolved as in `from_pairs`. Indices left without a value are dropped.
    pub fn from_index_values<I, V>(size: usize, indexes: I, values: V, zero_value: T) -> Self
    where
        I: IntoIterator<Item = usize>,
        V: IntoIterator<Item = T>,
    {
        Self::from_index_values_with_eq_comp(size, indexes, values, zero_value, EqualTo)
    }
}

impl<T, E> SparseMapVector<T, E> {
    /// Create an empty sparse vector with a custom equality comparator.
    pub fn with_eq_comp(size: usize, zero_value: T, eq_comp: E) -> Self {
        SparseMapVector {
            size,
            storage: BTreeMap::new(),
            zero_value,
            eq_comp,
        }
    }
    pub fn from_pairs_with_eq_comp<I>(size: usize, pairs: I, zero_value: T, eq_comp: E) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut storage = BTreeMap::new();
        for (index, value) in pairs {
            // first occurrence wins
            storage.entry(index).or_insert(value);
        }
        SparseMapVector {
            size,
            storage,
            zero_value,
            eq_comp,
        }
    }
    pub fn from_index_values_with_eq_comp<I, V>(
        size: usize,
        indexes: I,
        values: V,
        zero_value: T,
        eq_comp: E,
    ) -> Self
    where
        I: IntoIterator<Item = usize>,
        V: IntoIterator<Item = T>,
    {
        Self::from_pairs_with_eq_comp(size, indexes.into_iter().zip(values), zero_value, eq_comp)
    }
}

impl<T, E> SparseMapVector<T, E> {
    ///
    /// Get the value at the index, or `zero_value` if it has no entry.
    ///
    /// This never creates an entry.
    pub fn read(&self, index: usize) -> &T {
        self.storage.get(&index).unwrap_or(&self.zero_value)
    }
    /// Virtual size
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
    /// Value of unstored indices
    #[inline]
    pub fn zero_value(&self) -> &T {
        &self.zero_value
    }
    /// Equality comparator this vector was configured with
    #[inline]
    pub fn eq_comp(&self) -> &E {
        &self.eq_comp
    }
    /// Read-only view of this vector
    pub fn as_const(&self) -> &Self {
        self
    }
    /// Number of stored entries
    pub fn n_entries(&self) -> usize {
        self.storage.len()
    }
    /// Is there a stored entry at the index?
    pub fn contains(&self, index: usize) -> bool {
        self.storage.contains_key(&index)
    }
    /// Iterator on the stored `(index, &value)` in ascending order of index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.entries().map(|(&index, value)| (index, value))
    }
    pub(crate) fn entries(&self) -> btree_map::Iter<'_, usize, T> {
        self.storage.iter()
    }
    ///
    /// Handle of the element at the index.
    ///
    /// Each operation on the handle decides whether the index needs an entry.
    /// See `SparseReturnProxy`.
    pub fn at(&mut self, index: usize) -> SparseReturnProxy<'_, T, E> {
        SparseReturnProxy::new(self, index)
    }
    ///
    /// Exchange the whole contents (entries, size, zero value and comparator)
    /// with another vector, without copying entries.
    ///
    pub fn swap(&mut self, other: &mut Self) {
        debug!(
            "swap: size={} n_entries={} <-> size={} n_entries={}",
            self.size,
            self.storage.len(),
            other.size,
            other.storage.len()
        );
        std::mem::swap(self, other);
    }
    /// lookup-or-insert primitive shared by the element handle, together with
    /// the zero value to initialize a vacant entry from
    pub(crate) fn entry(&mut self, index: usize) -> (Entry<'_, usize, T>, &T) {
        (self.storage.entry(index), &self.zero_value)
    }
}

impl<T: Clone, E> SparseMapVector<T, E> {
    ///
    /// Mutable reference to the value at the index.
    ///
    /// If the index has no entry, an entry initialized with `zero_value` is
    /// created first.
    pub fn writable_ref(&mut self, index: usize) -> &mut T {
        let (entry, zero_value) = self.entry(index);
        match entry {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                trace!("materialize index={}", index);
                e.insert(zero_value.clone())
            }
        }
    }
    ///
    /// Dense representation `[v[0], .., v[size-1]]`
    ///
    /// Stored entries at or beyond `size` are not included.
    pub fn to_vec(&self) -> Vec<T> {
        let mut v = vec![self.zero_value.clone(); self.size];
        for (&index, value) in self.storage.range(..self.size) {
            v[index] = value.clone();
        }
        v
    }
}

impl<T: Zero, E: Default> Default for SparseMapVector<T, E> {
    fn default() -> Self {
        SparseMapVector {
            size: 0,
            storage: BTreeMap::new(),
            zero_value: T::zero(),
            eq_comp: E::default(),
        }
    }
}

/// `v[i]` reads without creating an entry
impl<T, E> Index<usize> for SparseMapVector<T, E> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        self.read(index)
    }
}

impl<T: std::fmt::Display, E> std::fmt::Display for SparseMapVector<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "SparseMapVector(size={}, zero={}, {{{}}})",
            self.size,
            self.zero_value,
            self.iter()
                .map(|(index, value)| format!("{}: {}", index, value))
                .join(", ")
        )
    }
}

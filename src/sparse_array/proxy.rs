//!
//! Element handle of `SparseMapVector`
//!
//! `SparseReturnProxy` stands for "the element at `index`" and decides on each
//! operation whether the index needs a stored entry.
//!
//! | operation | stored | not stored |
//! |---|---|---|
//! | `get`, `value` | stored value | zero value |
//! | `set` | overwrite | insert |
//! | `increment`, `decrement` (and post-) | modify | insert `zero ± 1` |
//! | `+=`, `-=` | modify | insert `zero op rhs` |
//! | `*=`, `/=` | modify | nothing |
//!
//! `*=` and `/=` on an unstored index leave it unstored whatever the zero value
//! is. This matches an eagerly filled vector only if the zero value `z`
//! satisfies `z * x == z` and `z / x == z`.
//!
use super::SparseMapVector;
use log::trace;
use num_traits::One;
use std::collections::btree_map::Entry;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Handle of `sa[index]`, created by `SparseMapVector::at`
#[derive(Debug)]
pub struct SparseReturnProxy<'a, T, E> {
    sa: &'a mut SparseMapVector<T, E>,
    index: usize,
}

impl<'a, T, E> SparseReturnProxy<'a, T, E> {
    pub(crate) fn new(sa: &'a mut SparseMapVector<T, E>, index: usize) -> Self {
        SparseReturnProxy { sa, index }
    }
    /// Index this handle points to
    pub fn index(&self) -> usize {
        self.index
    }
    /// Reference to the current value, without creating an entry.
    pub fn value(&self) -> &T {
        self.sa.read(self.index)
    }
    /// Is the index stored now?
    pub fn is_stored(&self) -> bool {
        self.sa.contains(self.index)
    }
    /// Apply `f` to the stored value if any. Otherwise do nothing.
    fn modify_if_stored<F: FnOnce(&mut T)>(&mut self, f: F) {
        let (entry, _) = self.sa.entry(self.index);
        if let Entry::Occupied(mut e) = entry {
            f(e.get_mut());
        }
    }
}

impl<'a, T: Clone, E> SparseReturnProxy<'a, T, E> {
    /// Current value, without creating an entry.
    pub fn get(&self) -> T {
        self.value().clone()
    }
    ///
    /// Assign the value.
    ///
    /// An unstored index is always stored, even if `value` equals the zero value.
    pub fn set(&mut self, value: T) -> &mut Self {
        let (entry, _) = self.sa.entry(self.index);
        match entry {
            Entry::Occupied(mut e) => {
                e.insert(value);
            }
            Entry::Vacant(e) => {
                trace!("materialize index={} by set", self.index);
                e.insert(value);
            }
        }
        self
    }
    /// Apply `f` to the stored value, or to a copy of the zero value that is
    /// then stored.
    fn modify_or_insert<R, F: FnOnce(&mut T) -> R>(&mut self, f: F) -> R {
        let index = self.index;
        let (entry, zero_value) = self.sa.entry(index);
        match entry {
            Entry::Occupied(mut e) => f(e.get_mut()),
            Entry::Vacant(e) => {
                trace!("materialize index={}", index);
                let mut value = zero_value.clone();
                let r = f(&mut value);
                e.insert(value);
                r
            }
        }
    }
}

impl<'a, T: Clone + One + AddAssign, E> SparseReturnProxy<'a, T, E> {
    /// `++x`, returns the new value
    pub fn increment(&mut self) -> T {
        self.modify_or_insert(|v| {
            *v += T::one();
            v.clone()
        })
    }
    /// `x++`, returns the previous value
    pub fn post_increment(&mut self) -> T {
        self.modify_or_insert(|v| {
            let old = v.clone();
            *v += T::one();
            old
        })
    }
}

impl<'a, T: Clone + One + SubAssign, E> SparseReturnProxy<'a, T, E> {
    /// `--x`, returns the new value
    pub fn decrement(&mut self) -> T {
        self.modify_or_insert(|v| {
            *v -= T::one();
            v.clone()
        })
    }
    /// `x--`, returns the previous value
    pub fn post_decrement(&mut self) -> T {
        self.modify_or_insert(|v| {
            let old = v.clone();
            *v -= T::one();
            old
        })
    }
}

impl<'a, T: Clone + AddAssign, E> AddAssign<T> for SparseReturnProxy<'a, T, E> {
    fn add_assign(&mut self, rhs: T) {
        self.modify_or_insert(|v| *v += rhs)
    }
}

impl<'a, T: Clone + SubAssign, E> SubAssign<T> for SparseReturnProxy<'a, T, E> {
    fn sub_assign(&mut self, rhs: T) {
        self.modify_or_insert(|v| *v -= rhs)
    }
}

impl<'a, T: MulAssign, E> MulAssign<T> for SparseReturnProxy<'a, T, E> {
    fn mul_assign(&mut self, rhs: T) {
        self.modify_if_stored(|v| *v *= rhs)
    }
}

impl<'a, T: DivAssign, E> DivAssign<T> for SparseReturnProxy<'a, T, E> {
    fn div_assign(&mut self, rhs: T) {
        self.modify_if_stored(|v| *v /= rhs)
    }
}

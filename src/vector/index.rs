//!
//! Unsigned integer types that can be used as an index of `Vector`
//!
//! `usize` is the real index space of every storage. Other widths are
//! converted into it on each access.
//!
use std::convert::TryFrom;

pub trait Indexable: Copy {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
}

impl Indexable for usize {
    #[inline]
    fn new(x: usize) -> Self {
        x
    }
    #[inline]
    fn index(&self) -> usize {
        *self
    }
}

/// # Panics
///
/// `index` panics if the value does not fit in `usize` (32-bit targets).
impl Indexable for u64 {
    #[inline]
    fn new(x: usize) -> Self {
        x as u64
    }
    #[inline]
    fn index(&self) -> usize {
        usize::try_from(*self).unwrap_or_else(|_| panic!("index {} exceeds usize", self))
    }
}

/// # Panics
///
/// `new` panics if the position does not fit in `u32`.
impl Indexable for u32 {
    #[inline]
    fn new(x: usize) -> Self {
        u32::try_from(x).unwrap_or_else(|_| panic!("position {} exceeds u32", x))
    }
    #[inline]
    fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_usize() {
        let x: usize = Indexable::new(10);
        assert_eq!(x.index(), 10);
    }
    #[test]
    fn index_u32() {
        let x: u32 = Indexable::new(10);
        assert_eq!(Indexable::index(&x), 10);
    }
    #[test]
    #[cfg(target_pointer_width = "64")]
    fn index_u64() {
        let x: u64 = Indexable::new(1 << 40);
        assert_eq!(Indexable::index(&x), 1 << 40);
    }
    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic]
    fn index_u32_overflow() {
        let _x: u32 = Indexable::new(1 << 40);
    }
}

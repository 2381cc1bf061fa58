//!
//! Single element operations in text form, such as `3+=2`
//!
//! The same operation list can be replayed on a `SparseMapVector` (through its
//! element handle) and on a `DenseStorage` (element-wise), and the two results
//! compared.
//!
//! ```text
//! 3=5    assign
//! 3++    increment
//! 3--    decrement
//! 3+=2   add
//! 3-=2   subtract
//! 3*=2   multiply
//! 3/=2   divide
//! ```
//!
use crate::sparse_array::SparseMapVector;
use crate::vector::{DenseStorage, Storage};
use derive_new::new;
use log::{debug, warn};
use num_traits::NumAssign;
use rand::prelude::*;
use std::str::FromStr;
use thiserror::Error;

///
/// Operation on the element at an index
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SparseOp<T> {
    Assign(usize, T),
    Increment(usize),
    Decrement(usize),
    Add(usize, T),
    Sub(usize, T),
    Mul(usize, T),
    Div(usize, T),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOpError {
    #[error("no operator in `{0}`")]
    MissingOperator(String),
    #[error("invalid index `{0}`")]
    InvalidIndex(String),
    #[error("invalid value `{0}`")]
    InvalidValue(String),
}

impl<T> SparseOp<T> {
    /// Target index of the operation
    pub fn index(&self) -> usize {
        match self {
            SparseOp::Assign(i, _)
            | SparseOp::Increment(i)
            | SparseOp::Decrement(i)
            | SparseOp::Add(i, _)
            | SparseOp::Sub(i, _)
            | SparseOp::Mul(i, _)
            | SparseOp::Div(i, _) => *i,
        }
    }
}

impl<T: NumAssign + Clone> SparseOp<T> {
    ///
    /// Apply through the element handle of the sparse vector, so that `*=` and
    /// `/=` on an unstored index are skipped.
    ///
    pub fn apply<E>(&self, v: &mut SparseMapVector<T, E>) {
        let mut e = v.at(self.index());
        match self {
            SparseOp::Assign(_, x) => {
                e.set(x.clone());
            }
            SparseOp::Increment(_) => {
                e.increment();
            }
            SparseOp::Decrement(_) => {
                e.decrement();
            }
            SparseOp::Add(_, x) => e += x.clone(),
            SparseOp::Sub(_, x) => e -= x.clone(),
            SparseOp::Mul(_, x) => e *= x.clone(),
            SparseOp::Div(_, x) => e /= x.clone(),
        }
    }
    ///
    /// Apply on the dense storage, where every index has its own value.
    ///
    /// Panics if the index is outside of the storage.
    pub fn apply_dense(&self, v: &mut DenseStorage<T>) {
        let e = v.get_mut(self.index());
        match self {
            SparseOp::Assign(_, x) => *e = x.clone(),
            SparseOp::Increment(_) => *e += T::one(),
            SparseOp::Decrement(_) => *e -= T::one(),
            SparseOp::Add(_, x) => *e += x.clone(),
            SparseOp::Sub(_, x) => *e -= x.clone(),
            SparseOp::Mul(_, x) => *e *= x.clone(),
            SparseOp::Div(_, x) => *e /= x.clone(),
        }
    }
}

impl<T: FromStr> FromStr for SparseOp<T> {
    type Err = ParseOpError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse_index = |t: &str| {
            t.trim()
                .parse::<usize>()
                .map_err(|_| ParseOpError::InvalidIndex(t.to_string()))
        };
        let parse_value = |t: &str| {
            t.trim()
                .parse::<T>()
                .map_err(|_| ParseOpError::InvalidValue(t.to_string()))
        };

        let (lhs, rhs) = match s.split_once('=') {
            Some(sides) => sides,
            None => {
                // `++` and `--` are the only operators without `=`
                if let Some(index) = s.strip_suffix("++") {
                    return Ok(SparseOp::Increment(parse_index(index)?));
                }
                if let Some(index) = s.strip_suffix("--") {
                    return Ok(SparseOp::Decrement(parse_index(index)?));
                }
                return Err(ParseOpError::MissingOperator(s.to_string()));
            }
        };
        let op = lhs.chars().last();
        let op = match op {
            Some('+') | Some('-') | Some('*') | Some('/') => op,
            _ => None,
        };
        match op {
            None => Ok(SparseOp::Assign(parse_index(lhs)?, parse_value(rhs)?)),
            Some(c) => {
                let index = parse_index(&lhs[..lhs.len() - 1])?;
                let value = parse_value(rhs)?;
                Ok(match c {
                    '+' => SparseOp::Add(index, value),
                    '-' => SparseOp::Sub(index, value),
                    '*' => SparseOp::Mul(index, value),
                    _ => SparseOp::Div(index, value),
                })
            }
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SparseOp<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SparseOp::Assign(i, x) => write!(f, "{}={}", i, x),
            SparseOp::Increment(i) => write!(f, "{}++", i),
            SparseOp::Decrement(i) => write!(f, "{}--", i),
            SparseOp::Add(i, x) => write!(f, "{}+={}", i, x),
            SparseOp::Sub(i, x) => write!(f, "{}-={}", i, x),
            SparseOp::Mul(i, x) => write!(f, "{}*={}", i, x),
            SparseOp::Div(i, x) => write!(f, "{}/={}", i, x),
        }
    }
}

///
/// Parse whitespace separated operations, such as `"0=3 2++ 0*=2"`
///
pub fn parse_ops<T: FromStr>(s: &str) -> Result<Vec<SparseOp<T>>, ParseOpError> {
    s.split_whitespace().map(|t| t.parse()).collect()
}

///
/// Random operations on `0..size` with small operands.
///
/// Divisors are never zero.
///
/// # Panics
///
/// Panics if `size == 0` and `n_ops > 0`, as there is no index to pick.
pub fn random_ops<R: Rng>(rng: &mut R, size: usize, n_ops: usize) -> Vec<SparseOp<i64>> {
    if n_ops == 0 {
        return Vec::new();
    }
    assert!(size > 0, "no index to operate on in an empty vector");
    (0..n_ops)
        .map(|_| {
            let i = rng.gen_range(0..size);
            match rng.gen_range(0..7) {
                0 => SparseOp::Assign(i, rng.gen_range(-5..=5)),
                1 => SparseOp::Increment(i),
                2 => SparseOp::Decrement(i),
                3 => SparseOp::Add(i, rng.gen_range(1..=5)),
                4 => SparseOp::Sub(i, rng.gen_range(1..=5)),
                5 => SparseOp::Mul(i, rng.gen_range(1..=3)),
                _ => SparseOp::Div(i, rng.gen_range(1..=3)),
            }
        })
        .collect()
}

/// Index whose value differs between the sparse and dense replay
#[derive(Debug, Clone, PartialEq, new)]
pub struct Mismatch<T> {
    pub index: usize,
    pub sparse: T,
    pub dense: T,
}

/// Result of `replay`
#[derive(Debug, Clone)]
pub struct Replay<T> {
    pub sparse: SparseMapVector<T>,
    pub dense: DenseStorage<T>,
}

///
/// Apply the operations both to a `SparseMapVector` and to a `DenseStorage`
/// of the same size and zero value.
///
/// An operation outside of `0..size` is applied on the sparse vector only.
///
pub fn replay<T: NumAssign + Clone>(
    size: usize,
    zero_value: T,
    ops: &[SparseOp<T>],
) -> Replay<T> {
    let mut sparse = SparseMapVector::new(size, zero_value.clone());
    let mut dense = DenseStorage::new(size, zero_value);
    for op in ops {
        op.apply(&mut sparse);
        if op.index() < size {
            op.apply_dense(&mut dense);
        } else {
            warn!("index {} is outside of size {}", op.index(), size);
        }
    }
    debug!("replayed {} ops, n_entries={}", ops.len(), sparse.n_entries());
    Replay { sparse, dense }
}

impl<T: PartialEq + Clone> Replay<T> {
    /// Indices in `0..size` whose values differ
    pub fn mismatches(&self) -> Vec<Mismatch<T>> {
        (0..self.dense.size())
            .filter_map(|i| {
                let s = self.sparse.read(i);
                let d = self.dense.get(i);
                if s != d {
                    Some(Mismatch::new(i, s.clone(), d.clone()))
                } else {
                    None
                }
            })
            .collect()
    }
}

//!
//! test of sparse_array through the public interface
//!
#[macro_use]
extern crate approx;

use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use sparsearray::op::{random_ops, replay};
use sparsearray::sparse_array::SparseMapVector;
use sparsearray::vector::{DenseStorage, Vector};
use test_case::test_case;

#[test_case(10, 0 ; "zero default")]
#[test_case(10, -3 ; "negative default")]
#[test_case(0, 5 ; "empty")]
fn default_read(size: usize, zero: i64) {
    let v: SparseMapVector<i64> = SparseMapVector::new(size, zero);
    for i in 0..size + 5 {
        assert_eq!(*v.read(i), zero);
        assert_eq!(v[i], zero);
    }
    assert_eq!(v.n_entries(), 0);
}

#[test]
fn assignment_materializes_idempotently() {
    let mut v: SparseMapVector<i64> = SparseMapVector::new(8, 0);
    v.at(4).set(9);
    assert_eq!(*v.read(4), 9);
    let n = v.n_entries();
    v.at(4).set(9);
    assert_eq!(v.n_entries(), n);
}

#[test]
fn increment_on_absent_index() {
    let mut v: SparseMapVector<i64> = SparseMapVector::new(8, 0);
    v.at(6).increment();
    assert_eq!(*v.read(6), 1);
    assert_eq!(v.n_entries(), 1);
}

#[test_case(true ; "mul")]
#[test_case(false ; "div")]
fn mul_div_on_absent_index(is_mul: bool) {
    let mut v: SparseMapVector<i64> = SparseMapVector::new(8, 0);
    let mut e = v.at(2);
    if is_mul {
        e *= 5;
    } else {
        e /= 5;
    }
    assert_eq!(*v.read(2), 0);
    assert_eq!(v.n_entries(), 0);
}

#[test]
fn duplicate_index_construction() {
    let v = SparseMapVector::from_pairs(8, vec![(3, 'a'), (3, 'b'), (5, 'c')], '.');
    assert_eq!(*v.read(3), 'a');
    assert_eq!(*v.read(5), 'c');

    let w = SparseMapVector::from_index_values(8, vec![3, 3, 5], vec!['a', 'b', 'c'], '.');
    assert_eq!(*w.read(3), 'a');
    assert_eq!(*w.read(5), 'c');
}

#[test]
fn swap_exchanges_full_identity() {
    let mut a = SparseMapVector::from_pairs(4, vec![(1, 9)], 0);
    let mut b = SparseMapVector::new(10, -1);
    a.swap(&mut b);
    assert_eq!(a.size(), 10);
    assert_eq!(*a.zero_value(), -1);
    assert_eq!(*a.read(1), -1);
    assert_eq!(b.size(), 4);
    assert_eq!(*b.zero_value(), 0);
    assert_eq!(*b.read(1), 9);
}

#[test]
fn writable_ref_materializes_then_mutates() {
    let mut v: SparseMapVector<i64> = SparseMapVector::new(8, 0);
    *v.writable_ref(7) = 3;
    assert!(v.contains(7));
    assert_eq!(*v.read(7), 3);
    assert_eq!(v.n_entries(), 1);
    *v.writable_ref(7) = 4;
    assert_eq!(*v.read(7), 4);
    assert_eq!(v.n_entries(), 1);
}

#[test]
fn random_ops_match_dense_with_zero_default() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    let ops = random_ops(&mut rng, 50, 1000);
    let r = replay(50, 0, &ops);
    assert!(r.mismatches().is_empty());
    // only touched indices are stored
    let touched: std::collections::BTreeSet<usize> = ops.iter().map(|op| op.index()).collect();
    assert!(r.sparse.n_entries() <= touched.len());
    assert!(r.sparse.iter().all(|(i, _)| touched.contains(&i)));
}

#[test]
fn float_sparse_vs_dense() {
    let mut s: SparseMapVector<f64> = SparseMapVector::new(5, 0.0);
    let mut d: Vector<DenseStorage<f64>> = Vector::new(5, 0.0);
    for i in 0..5 {
        let x = 0.1 * i as f64;
        let mut e = s.at(i);
        e += x;
        e += x;
        d[i] += x;
        d[i] += x;
    }
    let d_sparse = d.to_sparse(0.0);
    assert!(abs_diff_eq!(s, *d_sparse.storage(), epsilon = 1e-12));
    assert_abs_diff_eq!(*s.read(3), 0.6, epsilon = 1e-12);
}

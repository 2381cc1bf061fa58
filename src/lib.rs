//!
//! Sparse, fixed-size vectors whose unstored elements read a default value
//!
//! * `sparse_array` the ordered-map backed `SparseMapVector` and its element handle
//! * `vector` backend-generic `Vector` over dense and sparse storages
//! * `op` text form of element operations and sparse/dense replay
//!
pub mod op;
pub mod sparse_array;
pub mod vector;

#[cfg_attr(test, macro_use)]
extern crate approx;

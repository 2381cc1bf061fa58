#[cfg(test)]
mod tests {
    use super::super::{DenseStorage, Storage, Vector};
    use crate::sparse_array::SparseMapVector;

    ///
    /// sum of the items, written only against `Storage`
    ///
    fn total<S: Storage<Item = u32>>(s: &S) -> u32 {
        (0..s.size()).map(|i| *s.get(i)).sum()
    }

    #[test]
    fn storage_generic_consumer() {
        let mut d: DenseStorage<u32> = DenseStorage::new(5, 1);
        let mut s: SparseMapVector<u32> = Storage::new(5, 1);
        *d.get_mut(2) = 10;
        *s.get_mut(2) = 10;
        assert_eq!(total(&d), 14);
        assert_eq!(total(&s), 14);
    }

    #[test]
    fn u32_indexed_vector() {
        let mut v: Vector<SparseMapVector<u32>, u32> = Vector::new(5, 0);
        v[0u32] = 111;
        v[3u32] = 222;
        assert_eq!(v[0u32], 111);
        assert_eq!(v[1u32], 0);
        v.at(4u32).increment();
        let w: Vec<(u32, u32)> = v.iter().collect();
        assert_eq!(w, vec![(0, 111), (3, 222), (4, 1)]);
    }

    #[test]
    fn vector_conversion() {
        let default_value = 2;
        let mut v: Vector<DenseStorage<u32>, usize> = Vector::new(5, default_value);
        v[0] = 100;
        v[3] = 222;
        let w = v.to_sparse(default_value);
        assert_eq!(w.storage().n_entries(), 2);
        assert_eq!(v.to_vec(), w.to_vec());
        let v2 = w.to_dense();
        assert!(v2.is_dense());
        assert_eq!(v2.to_vec(), vec![100, 2, 2, 222, 2]);
    }

    #[test]
    fn vector_from_vec() {
        let a: Vector<DenseStorage<u32>, usize> = Vector::from_vec(5, 3, &[(0, 10), (4, 10)]);
        let b: Vector<SparseMapVector<u32>, usize> = Vector::from_vec(5, 3, &[(0, 10), (4, 10)]);
        assert_eq!(a.to_vec(), vec![10, 3, 3, 3, 10]);
        assert_eq!(b.to_vec(), vec![10, 3, 3, 3, 10]);
        assert_eq!(b.storage().n_entries(), 2);
    }

    #[test]
    fn vector_from_storage() {
        let s = SparseMapVector::from_pairs(4, vec![(1, 5u32)], 0);
        let v: Vector<SparseMapVector<u32>, u64> = Vector::from_storage(s);
        assert_eq!(v.len(), 4);
        assert_eq!(v[1u64], 5);
        assert_eq!(v[2u64], 0);
    }
}

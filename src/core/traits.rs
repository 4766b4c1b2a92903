//! Core linear-algebra traits for gsrelax.

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Vector norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Shape of a (possibly ragged) dense matrix.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    /// Number of stored entries in row `i`. Only ragged row lists differ from `ncols`.
    fn row_len(&self, _i: usize) -> usize {
        self.ncols()
    }
}

/// Random access to a single entry A[i, j].
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}

//! Residual r = b − A x and its Euclidean norm.

use num_traits::Float;

use crate::core::traits::{InnerProduct, MatVec};

/// Write r = b − A x into `r`. `x` is only read.
pub fn residual<M, T>(a: &M, b: &Vec<T>, x: &Vec<T>, r: &mut Vec<T>)
where
    M: MatVec<Vec<T>>,
    T: Float,
{
    a.matvec(x, r);
    for (ri, &bi) in r.iter_mut().zip(b) {
        *ri = bi - *ri;
    }
}

/// ‖b − A x‖₂, using `r` as scratch space.
pub fn residual_norm_with<M, T>(a: &M, b: &Vec<T>, x: &Vec<T>, r: &mut Vec<T>) -> T
where
    M: MatVec<Vec<T>>,
    T: Float,
{
    residual(a, b, x, r);
    ().norm(r)
}

/// ‖b − A x‖₂.
pub fn residual_norm<M, T>(a: &M, b: &Vec<T>, x: &Vec<T>) -> T
where
    M: MatVec<Vec<T>>,
    T: Float,
{
    let mut r = vec![T::zero(); b.len()];
    residual_norm_with(a, b, x, &mut r)
}

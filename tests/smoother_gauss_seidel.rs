//! Gauss–Seidel smoother tests for gsrelax
//!
//! The tests check a single forward sweep on identity and tridiagonal matrices
//! against hand-computed values, the near-zero pivot skip, and that repeated
//! sweeps drive a diagonally dominant system towards its solution.
//!
//! The tests use the `faer` crate for matrix construction and `approx` for floating-point comparisons.

use approx::assert_relative_eq;
use faer::Mat;
use gsrelax::{residual_norm, GaussSeidel, Smoother};

/// Constructs a tridiagonal matrix of size `n` with subdiagonal `a`, diagonal `b`, and superdiagonal `c`.
fn make_tridiag(n: usize, a: f64, b: f64, c: f64) -> Mat<f64> {
    let mut mat = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        if i > 0 { mat[(i, i-1)] = a; }
        mat[(i, i)] = b;
        if i+1 < n { mat[(i, i+1)] = c; }
    }
    mat
}

/// One sweep on the identity copies b into x.
#[test]
fn test_sweep_identity() {
    let n = 5;
    let a = Mat::<f64>::identity(n, n);
    let b: Vec<f64> = (0..n).map(|i| i as f64 - 1.5).collect();
    let mut x = vec![7.0; n];
    GaussSeidel::<f64>::new().sweep(&a, &b, &mut x);
    assert_relative_eq!(x.as_slice(), b.as_slice(), epsilon = 1e-12);
}

/// Forward sweep on a tridiagonal matrix from a zero guess.
///
/// Compares the result to a manually computed in-place sweep.
#[test]
fn test_sweep_tridiag_forward() {
    let n = 5;
    let a = make_tridiag(n, -1.0, 4.0, -1.0);
    let b = vec![1.0; n];
    let mut x = vec![0.0; n];
    GaussSeidel::<f64>::new().sweep(&a, &b, &mut x);
    // x[i] = (1 + x[i-1]) / 4 with x[i+1] still zero
    let mut expected = vec![0.0; n];
    for i in 0..n {
        let left = if i > 0 { expected[i-1] } else { 0.0 };
        expected[i] = (b[i] + left) / 4.0;
    }
    for i in 0..n {
        assert!((x[i] - expected[i]).abs() < 1e-12_f64, "sweep mismatch at i={}: got {}, expected {}", i, x[i], expected[i]);
    }
}

/// A row whose diagonal is below 1e-12 keeps its starting value; the others update.
#[test]
fn test_near_zero_pivot_row_is_frozen() {
    let mut a = make_tridiag(4, 1.0, 5.0, 1.0);
    a[(2, 2)] = 5e-13;
    let b = vec![1.0, 2.0, 3.0, 4.0];
    let mut x = vec![0.0; 4];
    let gs = GaussSeidel::<f64>::new();
    for _ in 0..10 {
        gs.sweep(&a, &b, &mut x);
        assert_eq!(x[2], 0.0);
    }
    assert!(x[0] != 0.0 && x[1] != 0.0 && x[3] != 0.0);
}

/// Repeated sweeps shrink the residual of a diagonally dominant system.
#[test]
fn test_smooth_reduces_residual() {
    let n = 8;
    let a = make_tridiag(n, -1.0, 4.0, -1.0);
    let b = vec![1.0; n];
    let mut x = vec![0.0; n];
    let r0 = residual_norm(&a, &b, &x);
    GaussSeidel::<f64>::new().smooth(&a, &b, &mut x, 10);
    let r10 = residual_norm(&a, &b, &x);
    assert!(r10 < 1e-4 * r0, "residual {} did not drop from {}", r10, r0);
}

/// Test the Display implementation.
#[test]
fn test_gauss_seidel_display() {
    let mut gs = GaussSeidel::<f64>::new();
    gs.set_pivot_tol(1e-10);
    let s = format!("{}", gs);
    assert!(s.contains("GaussSeidel(pivot_tol=1e-10"));
}

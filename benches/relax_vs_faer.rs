use criterion::{black_box, Criterion, criterion_group, criterion_main};
use faer::Mat;
use faer::linalg::solvers::SolveCore;
use gsrelax::{solve, solve_batch, CycleType};

fn diag_dominant(n: usize) -> (Mat<f64>, Vec<f64>) {
    let a = Mat::from_fn(n, n, |i, j| {
        if i == j { 2.0 * n as f64 } else { ((i * n + j) as f64).sin() }
    });
    let b: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    (a, b)
}

fn bench_relax_vs_faer(c: &mut Criterion) {
    let n = 12;
    let (a, b) = diag_dominant(n);

    c.bench_function("gsrelax V", |ben| {
        ben.iter(|| solve(black_box(&a), black_box(&b), CycleType::V).unwrap())
    });

    c.bench_function("gsrelax W", |ben| {
        ben.iter(|| solve(black_box(&a), black_box(&b), CycleType::W).unwrap())
    });

    c.bench_function("faer raw LU", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(a.as_ref());
            let mut y = b.clone();
            let n = y.len();
            let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
            factor.solve_in_place_with_conj(faer::Conj::No, y_mat);
        })
    });

    let systems: Vec<(Mat<f64>, Vec<f64>)> = (0..256).map(|_| diag_dominant(n)).collect();
    c.bench_function("gsrelax batch of 256", |ben| {
        ben.iter(|| solve_batch(black_box(&systems), CycleType::V))
    });
}

criterion_group!(benches, bench_relax_vs_faer);
criterion_main!(benches);

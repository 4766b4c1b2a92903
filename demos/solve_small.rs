use gsrelax::{CycleType, RelaxationSolver, SolveResult, SolverOptions};
use tracing_subscriber::EnvFilter;

fn print_result(cycle: CycleType, res: &SolveResult<f64>) {
    println!("{}-cycle: converged = {}, iterations = {}, residual = {:.6e}", cycle, res.converged, res.iterations, res.residual);
    for (i, xi) in res.x.iter().enumerate() {
        println!("  x[{}] = {:.6}", i + 1, xi);
    }
}

fn main() -> Result<(), gsrelax::RelaxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a = vec![
        vec![10.0, -1.0, 2.0, 0.0],
        vec![-1.0, 11.0, -1.0, 3.0],
        vec![2.0, -1.0, 10.0, -1.0],
        vec![0.0, 3.0, -1.0, 8.0],
    ];
    let b = vec![6.0, 25.0, -11.0, 15.0];

    for cycle in [CycleType::V, CycleType::W] {
        let opts = SolverOptions::<f64>::default().with_cycle(cycle);
        let solver = RelaxationSolver::from_options(&opts);
        println!("{}", solver);
        let res = solver.run(&a, &b)?;
        print_result(cycle, &res);
    }
    Ok(())
}

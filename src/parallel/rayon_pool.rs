// rayon-based shared-memory pool setup

use tracing::debug;

/// Size the global rayon pool to the number of logical CPUs.
///
/// Safe to call more than once; later calls leave the existing pool alone.
/// Returns the number of threads in the global pool.
pub fn init_thread_pool() -> usize {
    let threads = num_cpus::get();
    if rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .is_err()
    {
        debug!("global rayon pool already initialised");
    }
    rayon::current_num_threads()
}

// crates/engine/src/parallel/pool.rs
//! Process-wide worker pool: built on first use, reused by every execution.
use std::sync::OnceLock;

use lazyq_shared_kernel::{QueryError, Result};
use log::{debug, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

static POOL: OnceLock<std::result::Result<ThreadPool, String>> = OnceLock::new();

pub(crate) fn shared() -> Result<&'static ThreadPool> {
    POOL.get_or_init(|| {
        let threads = num_cpus::get().max(1);
        debug!("creating shared worker pool with {threads} threads");
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lazyq-worker-{i}"))
            .build()
            .map_err(|e| e.to_string())
    })
    .as_ref()
    .map_err(|details| {
        warn!("worker pool unavailable: {details}");
        QueryError::ThreadPoolCreation {
            details: details.clone(),
        }
    })
}

/// Number of threads in the shared pool.
///
/// # Errors
///
/// `ThreadPoolCreation` if the pool could not be built.
pub fn worker_capacity() -> Result<usize> {
    shared().map(ThreadPool::current_num_threads)
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for worker-pool sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (0 = no cap, use percentage)
    #[serde(default)]
    pub max_threads: usize,
    /// Percentage of CPU cores to use (1-100)
    #[serde(default = "default_thread_percentage")]
    pub thread_percentage: u8,
}

fn default_thread_percentage() -> u8 {
    75
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            thread_percentage: default_thread_percentage(),
        }
    }
}

impl ParallelConfig {
    /// Resolve the worker count for a parallel region.
    ///
    /// Applies `thread_percentage` to the available CPU cores, then the
    /// `max_threads` cap when non-zero. Always at least 1.
    pub fn resolve_workers(&self) -> usize {
        let cpu_cores = num_cpus::get();

        // Apply thread percentage from config
        let max_by_percentage =
            std::cmp::max(1, (cpu_cores * self.thread_percentage as usize) / 100);

        // Apply max_threads limit if specified (0 means use percentage calculation)
        if self.max_threads > 0 {
            std::cmp::min(self.max_threads, max_by_percentage)
        } else {
            max_by_percentage
        }
    }
}

/// A fixed-size thread pool with a known worker count.
///
/// Wraps a [`rayon::ThreadPool`] so callers always know exactly how many
/// workers a region will run on. The count is decided at construction and
/// never changes, which is what makes per-region output observable in tests.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Build a pool sized from config and available CPU cores.
    pub fn build(config: &ParallelConfig) -> Result<Self> {
        let workers = config.resolve_workers();
        debug!(
            workers,
            cpu_cores = num_cpus::get(),
            thread_percentage = config.thread_percentage,
            max_threads = config.max_threads,
            "resolved worker count"
        );
        Self::with_workers(workers)
    }

    /// Build a pool with an explicit worker count (clamped to at least 1).
    pub fn with_workers(workers: usize) -> Result<Self> {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("mylib-worker-{i}"))
            .build()?;
        Ok(Self { pool, workers })
    }

    /// Number of worker threads in this pool.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `f` once on every worker thread, concurrently.
    ///
    /// This is the parallel-region primitive: the call blocks until every
    /// worker has returned (the barrier at region exit), and the per-worker
    /// results come back in thread-index order. Each worker receives its own
    /// zero-based index, stable for the lifetime of the pool.
    pub fn broadcast<F, R>(&self, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync,
        R: Send,
    {
        self.pool.broadcast(|ctx| f(ctx.index()))
    }
}

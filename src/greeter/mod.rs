//! The greeter: one line of output per worker in a parallel region
//!
//! Each worker formats its full line into a local buffer and performs a
//! single locked write, so concurrent lines never interleave mid-line. The
//! pool is an injected value; worker count is decided by the caller, not by
//! ambient process state.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use anyhow::Result;
use tracing::debug;

use crate::config::MylibConfig;
use crate::parallel::WorkerPool;

/// Fixed tag prefixed to every greeting line
pub const GREETING_TAG: &str = "[mylib]";

/// Produces one greeting line per concurrently executing worker.
///
/// Stateless between calls: every invocation is an independent parallel
/// region with no memory of prior calls.
pub struct Greeter {
    pool: WorkerPool,
}

impl Greeter {
    /// Create a greeter over an explicit worker pool
    pub fn new(pool: WorkerPool) -> Self {
        Self { pool }
    }

    /// Create a greeter with a pool sized from config
    pub fn from_config(config: &MylibConfig) -> Result<Self> {
        Ok(Self::new(WorkerPool::build(&config.parallel)?))
    }

    /// Number of workers that will participate in each region
    pub fn workers(&self) -> usize {
        self.pool.workers()
    }

    /// Run a parallel region in which every worker prints its greeting to
    /// standard output.
    ///
    /// Returns only after all workers have written their lines; no line is
    /// printed after this call returns. Line order across workers is
    /// unspecified. I/O errors from the stream propagate unchanged.
    pub fn greet(&self) -> Result<()> {
        self.greet_to(std::io::stdout())
    }

    /// Run the region, writing each worker's greeting into `writer`.
    ///
    /// One write call per worker, serialized by a mutex around the sink, so
    /// lines are never torn even when the sink itself is not line-atomic.
    pub fn greet_to<W: Write + Send>(&self, writer: W) -> Result<()> {
        debug!(workers = self.pool.workers(), "entering parallel region");

        let writer = Mutex::new(writer);
        let results = self.pool.broadcast(|index| {
            let line = format!("{GREETING_TAG} Hello from thread {index}\n");
            let mut out = writer.lock().unwrap_or_else(PoisonError::into_inner);
            out.write_all(line.as_bytes())
        });
        for result in results {
            result?;
        }

        let mut writer = writer.into_inner().unwrap_or_else(PoisonError::into_inner);
        writer.flush()?;

        debug!("parallel region complete");
        Ok(())
    }

    /// Run the region and return each worker's line (without the trailing
    /// newline) in thread-index order, instead of writing anywhere.
    pub fn greeting_lines(&self) -> Vec<String> {
        self.pool
            .broadcast(|index| format!("{GREETING_TAG} Hello from thread {index}"))
    }
}

//! Worker-pool management for parallel regions
//!
//! This module owns **system resource management**: it detects available CPU
//! cores, applies user configuration (thread percentage, max threads) to pick
//! a worker count, and builds a fixed-size thread pool exposing a
//! parallel-region primitive.
//!
//! ## What This Module Does:
//! - **Resource Discovery**: Detects available CPU cores using `num_cpus::get()`
//! - **Resource Calculation**: Applies thread percentage and max-thread cap
//! - **Region Execution**: Runs a closure once per pool thread with a barrier
//!   at region exit
//!
//! ## What This Module Does NOT Do:
//! - **Domain Logic**: Does not know what the workers print or why
//! - **Work Distribution**: A region has no work queue; every worker runs the
//!   same closure exactly once
//!
//! # Example Usage
//!
//! ```rust
//! use mylib::parallel::{ParallelConfig, WorkerPool};
//!
//! // Resolve worker count from system resources and config
//! let pool = WorkerPool::build(&ParallelConfig::default()).unwrap();
//!
//! // Or pin an explicit count
//! let pool = WorkerPool::with_workers(4).unwrap();
//!
//! // Each worker observes its own zero-based index
//! let indices = pool.broadcast(|index| index);
//! assert_eq!(indices, vec![0, 1, 2, 3]);
//! ```

pub mod pool;

// Re-export main types for easier access
pub use pool::{ParallelConfig, WorkerPool};

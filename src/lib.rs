//! # Mylib - Parallel Worker Greeting
//!
//! A small library and CLI that exercises an explicit thread pool: one call
//! runs a parallel region across a fixed number of worker threads, and each
//! worker prints a single line identifying itself by its zero-based index
//! within the region.
//!
//! ## Features
//!
//! - **Explicit worker counts**: the pool is an injected value, never an
//!   ambient process-wide setting, so behavior is deterministic and testable
//! - **Tear-free output**: each worker formats its full line locally and
//!   performs exactly one locked write to the shared stream
//! - **Resource-aware defaults**: worker count derived from available CPU
//!   cores, with a configurable percentage and hard cap
//!
//! ## Quick Start
//!
//! ```bash
//! # Greet from every worker the config resolves to
//! mylib hello
//!
//! # Greet from exactly four workers
//! mylib hello --threads 4
//! ```

pub mod cli;
pub mod config;
pub mod greeter;
pub mod parallel;

pub use cli::{Cli, Output};
pub use config::MylibConfig;
pub use greeter::Greeter;
pub use parallel::{ParallelConfig, WorkerPool};

/// Result type alias for Mylib operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

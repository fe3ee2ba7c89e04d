//! Hello command implementation
//!
//! Runs one parallel region and prints a greeting line per worker.

use anyhow::Result;

use crate::cli::Output;
use crate::config::MylibConfig;
use crate::greeter::Greeter;
use crate::parallel::WorkerPool;

/// Execute the hello command
pub fn execute(threads: Option<usize>, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = MylibConfig::load_with_custom_config(config_path)?;
    config.validate()?;

    // --threads pins the pool size; otherwise the config resolves it
    let pool = match threads {
        Some(n) => WorkerPool::with_workers(n)?,
        None => WorkerPool::build(&config.parallel)?,
    };

    output.verbose(&format!(
        "Running parallel region with {} workers",
        pool.workers()
    ));

    let greeter = Greeter::new(pool);
    greeter.greet()?;

    output.verbose("All workers finished");
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mylib::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

/// Initialize the tracing subscriber on stderr.
///
/// Diagnostics must never interleave with greeting lines, which belong to
/// stdout. `RUST_LOG` takes priority; otherwise `--verbose` raises the
/// default level to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "mylib=debug" } else { "mylib=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

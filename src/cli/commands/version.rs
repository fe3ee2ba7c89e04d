//! Version command implementation
//!
//! Displays version information about Mylib.

use anyhow::Result;

use crate::cli::Output;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");

    output.header("Mylib Version Information");
    output.key_value("Version:", &format!("{name} v{version}"));
    output.key_value("Description:", description);
    output.key_value("Rust edition:", "2024");
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
    );
    output.key_value("Available cores:", &num_cpus::get().to_string());
    output.blank_line();

    Ok(())
}

//! Command-line interface for Mylib
//!
//! This module provides the main CLI structure and command handling for
//! Mylib. It uses clap for argument parsing and provides a clean,
//! user-friendly interface.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;

pub use output::Output;

/// Mylib - Parallel worker greeting with explicit thread-pool control
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print one greeting line per worker in a parallel region
    Hello {
        /// Exact number of worker threads (overrides config; 0 means 1)
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Show version information
    Version,
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged effective configuration
    Show,
    /// Validate configuration
    Validate,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        // Handle the command
        match self.command {
            Some(Commands::Hello { threads }) => {
                commands::hello::execute(threads, self.config.as_deref(), &output)
            }
            Some(Commands::Version) => commands::version::execute(&output),
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, self.config.as_deref(), &output)
            }
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

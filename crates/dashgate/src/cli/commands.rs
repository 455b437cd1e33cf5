//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// DashScope chat gateway.
#[derive(Debug, Parser)]
#[command(name = "dashgate", version, about = "DashScope chat gateway")]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP gateway
    Serve {
        /// Bind address override (e.g., "127.0.0.1:8080")
        #[arg(long)]
        bind: Option<String>,
    },
}

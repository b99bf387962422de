//! Command-line argument definitions.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Imaging activity windows.
///
/// Orders satellite imaging activities chronologically and splits them into
/// windows of one activity state.
#[derive(Debug, Parser)]
#[command(name = "mas", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the activities JSON file (overrides the configured one).
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every valid activity in chronological order.
    Chronological {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show activity windows.
    Windows {
        /// Only show windows whose first activity has this state.
        #[arg(short, long)]
        state: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Serve the HTTP API.
    Serve {
        /// Address to listen on (overrides the configured one).
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
}

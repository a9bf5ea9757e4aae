use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// relay — queue-driven approval event relay
#[derive(Parser)]
#[command(name = "relay", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the batch ingress server
    Serve {
        /// Port to bind
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Replay one saved batch envelope and print the summary
    Process {
        /// Path to a JSON file holding the queue-event envelope
        #[arg(long)]
        file: PathBuf,
    },
}

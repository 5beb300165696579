// src/cli/mod.rs
// CLI module for Ohio Therapy commands

use clap::{Parser, Subcommand};

pub mod chat;
pub mod serve;

pub use chat::run_stdio_chat;
pub use serve::run_server;

#[derive(Parser)]
#[command(name = "ohio-therapy")]
#[command(about = "Keyword-driven wellness companion")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP chat API (default)
    Serve {
        /// Interface to bind (overrides OHIO_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides OHIO_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Chat in the terminal
    Chat {
        /// Seed fragment selection for a reproducible conversation
        #[arg(long)]
        seed: Option<u64>,

        /// Reply immediately instead of simulating thinking time
        #[arg(long)]
        no_delay: bool,
    },

    /// Print the instruction prompt rendered for a message
    Prompt {
        /// The user message
        #[arg(index = 1)]
        message: String,
    },

    /// Print the welcome message
    Welcome,
}

impl Commands {
    /// Log level for this command; interactive commands stay quiet.
    pub fn log_level(&self, configured: tracing::Level) -> tracing::Level {
        match self {
            Commands::Serve { .. } => configured,
            Commands::Chat { .. } | Commands::Prompt { .. } | Commands::Welcome => {
                tracing::Level::WARN
            }
        }
    }
}

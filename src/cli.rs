use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the identification HTTP service.
    Daemon {},

    /// Identify a single URL and print the result as JSON.
    Identify {
        /// An absolute URL (scheme and host required).
        url: String,
    },
}

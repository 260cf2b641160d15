//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Explore the mansion room by room, choosing left or right until a room has no exits
#[derive(Parser, Debug)]
#[command(name = "mansao")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Print the mansion layout and exit
    #[arg(long)]
    pub map: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sitecheck")]
#[command(about = "Configuration linter for static documentation sites")]
pub struct Cli {
    #[arg(short, long, default_value = "site.toml")]
    pub config: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the configuration and lint the docs tree it points at
    Check {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Check that every external script and stylesheet URL is reachable
    Probe {
        #[arg(long, default_value = "5")]
        concurrent_requests: usize,

        #[arg(long, default_value = "10")]
        timeout_seconds: u64,
    },
    /// Round-trip the configuration and print (or write) the normalized form
    Fmt {
        #[arg(long, help = "Rewrite the configuration file in place")]
        write: bool,
    },
    /// Print the navigation tree
    Nav,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

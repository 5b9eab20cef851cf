//! Soulgraph CLI - Command-line interface for the trust graph
//!
//! Loads a soul snapshot from a JSON file and runs trust-graph queries
//! against it: paths, neighborhoods, recommendations, and statistics.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "soulgraph")]
#[command(author = "Soulgraph Contributors")]
#[command(version)]
#[command(about = "Trust-graph analysis over soul snapshots", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Snapshot file (JSON array of souls)
    #[arg(short, long, global = true, default_value = "souls.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest trust path between two souls
    Path {
        /// Source soul (id or unique name prefix)
        from: String,

        /// Target soul (id or unique name prefix)
        to: String,
    },

    /// Print the degrees of separation between two souls (-1 if unreachable)
    Degrees {
        from: String,
        to: String,
    },

    /// List souls reachable within a bounded number of hops
    Network {
        /// The soul to explore from
        soul: String,

        /// Maximum hops to explore
        #[arg(short, long, default_value = "3")]
        degrees: usize,

        /// Maximum results to return
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Rank souls the given soul should endorse next
    Recommend {
        soul: String,

        /// Maximum results to return
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Find souls similar to the given soul
    Similar {
        soul: String,

        /// Maximum results to return
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Show a soul's trust summary
    Stats {
        soul: String,
    },

    /// Show snapshot-wide graph statistics
    Info,

    /// Export the graph (nodes + edges) to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "soulgraph.json")]
        output: PathBuf,
    },

    /// Record a trust endorsement and rewrite the snapshot file
    Trust {
        /// The endorsing soul
        from: String,

        /// The soul being endorsed
        to: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Path { from, to } => commands::path(&cli.file, &from, &to),
        Commands::Degrees { from, to } => commands::degrees(&cli.file, &from, &to),
        Commands::Network {
            soul,
            degrees,
            limit,
        } => commands::network(&cli.file, &soul, degrees, limit),
        Commands::Recommend { soul, limit } => commands::recommend(&cli.file, &soul, limit),
        Commands::Similar { soul, limit } => commands::similar(&cli.file, &soul, limit),
        Commands::Stats { soul } => commands::stats(&cli.file, &soul),
        Commands::Info => commands::info(&cli.file),
        Commands::Export { output } => commands::export(&cli.file, &output),
        Commands::Trust { from, to } => commands::trust(&cli.file, &from, &to),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

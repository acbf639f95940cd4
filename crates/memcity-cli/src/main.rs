//! Composition root for the memory knowledge-graph pipeline: wires the
//! Extractor, Graph Store, Decay & Weighting, Ingestion Supervisor, and
//! Layout Projector crates together behind a `clap`-parsed CLI.
//!
//! `memcity watch` runs the full watch/debounce/rebuild pipeline and prints
//! each published snapshot frame. `memcity status` and `memcity layout` run
//! one-shot equivalents (a single rebuild, optionally projected into a
//! layout) for scripting and debugging without standing up a watcher.

mod commands;
mod pipeline;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{layout, status, watch};

#[derive(Parser)]
#[command(name = "memcity")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Memory markdown knowledge-graph ingestion and city-layout projector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a memory workspace and print each rebuilt snapshot frame
    Watch(watch::WatchArgs),

    /// Rebuild the graph once and print a summary or the decayed snapshot
    Status(status::StatusArgs),

    /// Rebuild the graph once and print a projected city layout
    Layout(layout::LayoutArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = memcity_config::Config::load()?;

    let result = match cli.command {
        Commands::Watch(args) => watch::run(args, config).await,
        Commands::Status(args) => status::run(args, config).await,
        Commands::Layout(args) => layout::run(args, config).await,
    };

    // spec §7's Fatal error class: one final diagnostic log line, then a
    // non-zero exit. Everything that reaches this point already exhausted
    // its own recoverable-failure handling (per-file I/O, extraction) inside
    // the component that produced it.
    if let Err(error) = result {
        tracing::error!(%error, "exiting after a fatal error");
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_parses_known_subcommands() {
        let cli = Cli::try_parse_from(["memcity", "status"]).expect("parse status");
        assert!(matches!(cli.command, Commands::Status(_)));

        let cli = Cli::try_parse_from(["memcity", "layout", "--workspace", "/tmp/ws"]).expect("parse layout");
        assert!(matches!(cli.command, Commands::Layout(_)));
    }

    #[test]
    fn clap_accepts_watch_with_no_arguments() {
        let cli = Cli::try_parse_from(["memcity", "watch"]).expect("parse watch");
        assert!(matches!(cli.command, Commands::Watch(_)));
    }
}

//! Continuously watch a memory workspace and print each rebuilt snapshot
//! frame as a line of JSON (spec §4.4, §6's "Snapshot frame (published to
//! hub)"). A stand-in for the external hub: every generation this process
//! would otherwise fan out over the persistent channel is instead written
//! to stdout, one JSON object per line.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use memcity_config::Config;
use memcity_ingest::{Supervisor, WatchSink};

#[derive(Args)]
pub struct WatchArgs {
    /// Workspace directory to watch. Defaults to the configured
    /// `MEMCITY_WORKSPACE_PATH` / platform-default workspace.
    #[arg(long)]
    workspace: Option<PathBuf>,
}

pub async fn run(args: WatchArgs, config: Config) -> anyhow::Result<()> {
    let workspace = args.workspace.unwrap_or_else(|| config.workspace_path.clone());
    tracing::info!(workspace = %workspace.display(), "starting watch");

    let (sink, mut rx) = WatchSink::new();
    let supervisor = Supervisor::start(workspace, &config, Arc::new(sink)).await?;

    let mut last_generation = 0u64;
    loop {
        tokio::select! {
            result = rx.changed() => {
                if result.is_err() {
                    break;
                }
                let Some(snapshot) = rx.borrow().clone() else { continue };
                if snapshot.generation == last_generation {
                    continue;
                }
                last_generation = snapshot.generation;
                println!("{}", serde_json::to_string(&snapshot)?);
            }
            () = tokio::signal::ctrl_c() => {
                tracing::info!("ctrl-c received, shutting down");
                break;
            }
        }
    }

    supervisor.shutdown().await;
    Ok(())
}

//! One-shot health check of a memory workspace: reads the watched set once,
//! rebuilds and decays the graph, and prints a human-readable summary —
//! node/edge counts, display-weight bucket distribution, and the
//! highest-scoring nodes. Useful as a quick sanity check without standing
//! up the full watch/debounce pipeline.

use std::path::PathBuf;

use clap::Args;
use memcity_config::Config;
use memcity_decay::{bucket, WeightBucket};

use crate::pipeline::build_decayed_snapshot;

#[derive(Args)]
pub struct StatusArgs {
    /// Workspace directory to inspect. Defaults to the configured
    /// `MEMCITY_WORKSPACE_PATH` / platform-default workspace.
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Print the full decayed snapshot as JSON instead of the summary.
    #[arg(long)]
    json: bool,

    /// Number of top-weighted nodes to list in the summary (default 10).
    #[arg(long, default_value_t = 10)]
    top: usize,
}

pub async fn run(args: StatusArgs, config: Config) -> anyhow::Result<()> {
    let workspace = args.workspace.unwrap_or_else(|| config.workspace_path.clone());
    let snapshot = build_decayed_snapshot(&workspace, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("workspace: {}", workspace.display());
    println!("generation: {}", snapshot.generation);
    println!("nodes: {}", snapshot.nodes.len());
    println!("edges: {}", snapshot.edges.len());

    let (mut strong, mut stable, mut fading) = (0usize, 0usize, 0usize);
    for node in &snapshot.nodes {
        match bucket(node.display_weight) {
            WeightBucket::Strong => strong += 1,
            WeightBucket::Stable => stable += 1,
            WeightBucket::Fading => fading += 1,
        }
    }
    println!("buckets: strong={strong} stable={stable} fading={fading}");

    let mut ranked: Vec<_> = snapshot.nodes.iter().collect();
    ranked.sort_by(|a, b| b.display_weight.total_cmp(&a.display_weight));

    println!("top {} nodes by display weight:", args.top.min(ranked.len()));
    for node in ranked.into_iter().take(args.top) {
        println!(
            "  {:<40} {:<12} weight={:.3} mentions={}",
            node.id, node.entity_type, node.display_weight, node.mention_count
        );
    }

    Ok(())
}

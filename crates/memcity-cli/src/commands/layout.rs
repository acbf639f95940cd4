//! One-shot run of the Layout Projector against a workspace's current
//! state: rebuild and decay the graph, then project it into buildings,
//! district bounds, and connections (spec §4.5, §6's "Layout result
//! frame"). Printed as a single JSON object to stdout.

use std::path::PathBuf;

use clap::Args;
use memcity_config::Config;
use memcity_layout::LayoutConfig;

use crate::pipeline::{build_decayed_snapshot, three_most_recent_documents};

#[derive(Args)]
pub struct LayoutArgs {
    /// Workspace directory to project. Defaults to the configured
    /// `MEMCITY_WORKSPACE_PATH` / platform-default workspace.
    #[arg(long)]
    workspace: Option<PathBuf>,
}

pub async fn run(args: LayoutArgs, config: Config) -> anyhow::Result<()> {
    let workspace = args.workspace.unwrap_or_else(|| config.workspace_path.clone());
    let snapshot = build_decayed_snapshot(&workspace, &config)?;
    let recent = three_most_recent_documents(&workspace);

    let layout_config = LayoutConfig::from_config(&config);
    let frame = memcity_layout::project(&snapshot, &recent, &layout_config)?;

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

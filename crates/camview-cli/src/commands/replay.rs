use std::path::PathBuf;

use anyhow::{Context, Result};
use camview_core::config::ViewConfig;
use camview_core::replay::ReplayScript;
use clap::Args;

#[derive(Args)]
pub struct ReplayArgs {
    /// Replay script (TOML)
    pub script: PathBuf,

    /// Save the final view state as a config file
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: ReplayScript = toml::from_str(&text)
        .with_context(|| format!("Failed to parse script {}", args.script.display()))?;

    let (session, outcomes) = script
        .play()
        .with_context(|| format!("Replay of {} failed", args.script.display()))?;

    crate::summary::print_replay_summary(&session, &outcomes);

    if let Some(ref path) = args.save_config {
        let toml_str = toml::to_string_pretty(&ViewConfig::capture(&session))?;
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("View config saved to {}", path.display());
    }

    Ok(())
}

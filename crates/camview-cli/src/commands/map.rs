use anyhow::{Context, Result};
use clap::Args;

use super::{parse_point, ViewArgs};

#[derive(Args)]
pub struct MapArgs {
    /// Panel position as x,y
    #[arg(long, allow_hyphen_values = true)]
    pub at: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn run(args: &MapArgs) -> Result<()> {
    let panel = parse_point(&args.at).context("Invalid --at")?;
    let session = args.view.session()?;
    let display = session
        .mapper()
        .context("Panel has no area")?
        .panel_to_sensor(panel);
    let absolute = session.geometry().to_absolute(display);

    crate::summary::print_map_summary(&session, panel, display, absolute);
    Ok(())
}

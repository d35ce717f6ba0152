use anyhow::Result;
use clap::Args;

use super::ViewArgs;

#[derive(Args)]
pub struct FitArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

/// Fit the requested zoom rectangle into the panel and report the result.
pub fn run(args: &FitArgs) -> Result<()> {
    let session = args.view.session()?;
    crate::summary::print_fit_summary(&session);
    Ok(())
}

mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "camview", about = "Camera viewport geometry tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a zoom rectangle into a panel
    Fit(commands::fit::FitArgs),
    /// Map a panel pixel to sensor coordinates
    Map(commands::map::MapArgs),
    /// Print or save a default view config
    Config(commands::config::ConfigArgs),
    /// Show the capability table for a camera type
    Camera(commands::camera::CameraArgs),
    /// Replay a scripted pointer/command session
    Replay(commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Fit(args) => commands::fit::run(args),
        Commands::Map(args) => commands::map::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Camera(args) => commands::camera::run(args),
        Commands::Replay(args) => commands::replay::run(args),
    }
}

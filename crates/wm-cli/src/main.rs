//! CLI frontend for the worldmap loader.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wm",
    about = "Check, inspect, and export worldmaps",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log loader activity to stderr (-v warnings, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where to find the map.
#[derive(Args)]
struct MapArgs {
    /// Worldmap path, relative to the data directory
    path: String,

    /// Data directory all game paths are resolved against
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a worldmap and report problems
    Check {
        #[command(flatten)]
        map: MapArgs,
    },

    /// Show map metadata and every placed object
    Show {
        #[command(flatten)]
        map: MapArgs,
    },

    /// List level references with their prefetched titles
    Levels {
        #[command(flatten)]
        map: MapArgs,
    },

    /// List spawn points
    Spawns {
        #[command(flatten)]
        map: MapArgs,
    },

    /// Export the loaded map as JSON
    Export {
        #[command(flatten)]
        map: MapArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "error",
        1 => "warn",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { map } => commands::check::run(&map.data_dir, &map.path),
        Commands::Show { map } => commands::show::run(&map.data_dir, &map.path),
        Commands::Levels { map } => commands::levels::run(&map.data_dir, &map.path),
        Commands::Spawns { map } => commands::spawns::run(&map.data_dir, &map.path),
        Commands::Export { map, output } => {
            commands::export::run(&map.data_dir, &map.path, output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! texbake CLI - batch converter for DDS avatar textures.
//!
//! Converts every `.dds` texture in the avatar directory to a PNG named
//! after the character, rotates it 180 degrees, and removes the source.
//!
//! # Usage
//!
//! ```bash
//! # Convert using the repository layout rooted at the current directory
//! texbake
//!
//! # Point at another checkout
//! texbake --root ../app
//!
//! # View configuration
//! texbake config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// texbake - batch DDS to PNG conversion for avatar art.
#[derive(Parser, Debug)]
#[command(name = "texbake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Repository root the texture directory and converter are resolved against
    #[arg(long, global = true, env = "TEXBAKE_ROOT")]
    root: Option<PathBuf>,

    /// Config file (defaults to the platform config directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands. Without one, the conversion runs.
#[derive(Subcommand, Debug)]
enum Commands {
    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let mut config = match &cli.config {
        Some(path) => texbake_core::Config::load_from(path)?,
        None => match texbake_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `texbake config path`."
                );
                texbake_core::Config::default()
            }
        },
    };
    if let Some(root) = cli.root {
        config.paths.root = root;
    }
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("texbake v{}", texbake_core::VERSION);

    match cli.command {
        None => cli::convert::execute(&config).await,
        Some(Commands::Config(args)) => cli::config::execute(args, &config),
    }
}

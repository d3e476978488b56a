//! The `texbake config` command for configuration management.

use std::io::Write;
use std::path::Path;

use clap::{Args, Subcommand};
use texbake_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration and the paths it resolves to
    Show,

    /// Show where texbake looks for its config file
    Path,

    /// Write the effective configuration to the config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config: &Config) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let default_path = Config::default_path();

    match args.command {
        ConfigCommand::Show => show(config, &mut out),
        ConfigCommand::Path => path(&default_path, &mut out),
        ConfigCommand::Init { force } => init(config, &default_path, force, &mut out),
    }
}

fn show(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", config.to_toml()?)?;
    writeln!(
        out,
        "# input directory: {}{}",
        config.input_dir().display(),
        missing_marker(&config.input_dir(), Path::is_dir)
    )?;
    writeln!(
        out,
        "# converter:       {}{}",
        config.converter_path().display(),
        missing_marker(&config.converter_path(), Path::is_file)
    )?;
    Ok(())
}

fn missing_marker(path: &Path, present: fn(&Path) -> bool) -> &'static str {
    if present(path) {
        ""
    } else {
        " (missing)"
    }
}

fn path(default_path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", default_path.display())?;
    if !default_path.exists() {
        writeln!(out, "# not created yet; run `texbake config init`")?;
    }
    Ok(())
}

/// Write `config` to `path`. The effective config is written, so a `--root`
/// given on the command line ends up in the file.
fn init(config: &Config, path: &Path, force: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, config.to_toml()?)?;

    tracing::info!("Config file created at: {}", path.display());
    writeln!(out, "Configuration initialized at: {}", path.display())?;
    Ok(())
}

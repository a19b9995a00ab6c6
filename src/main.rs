use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mindmymoney::cli::{run_interactive, run_script};
use mindmymoney::config::{Settings, TrackerPaths};

#[derive(Parser)]
#[command(
    name = "mindmymoney",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "MindMyMoney records expenditures, credit cards and income from a \
                  line-oriented shell and breaks spending down by category for a \
                  day, month or year."
)]
struct Cli {
    /// Settings file to use instead of the one in the config directory
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Read commands from stdin without a prompt or line editing
    #[arg(
        long,
        env = "MINDMYMONEY_SCRIPT",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    script: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the shell (default)
    Shell,

    /// Write a settings file with default values
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let paths = TrackerPaths::new().context("Failed to resolve the config directory")?;
    let settings_file = cli.config.clone().unwrap_or_else(|| paths.settings_file());
    let settings = Settings::load_from(&settings_file)
        .with_context(|| format!("Failed to load settings from {}", settings_file.display()))?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell if cli.script => run_script(&settings).context("Script failed")?,
        Commands::Shell => run_interactive(&settings, &paths).context("Shell failed")?,
        Commands::Init => {
            settings.save(&paths).context("Failed to write settings")?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("MindMyMoney Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", settings_file.display());
            println!("History file:     {}", paths.history_file().display());
            println!();
            println!("Currency symbol:  {}", settings.currency_symbol);
            println!("Bar glyph:        {}", settings.bar_glyph);
            println!("Bar step:         {}%", settings.bar_step_percent);
            println!("Show banner:      {}", settings.show_banner);
        }
    }

    Ok(())
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.is_empty() => EnvFilter::try_new(spec).context("Invalid RUST_LOG")?,
        _ => EnvFilter::try_new(format!("mindmymoney={}", level)).context("Invalid log level")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

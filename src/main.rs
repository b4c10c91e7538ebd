use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "piggy")]
#[command(about = "Piggy - gamified savings goals in your terminal")]
#[command(version)]
struct Cli {
    /// Directory holding the state file (defaults to ~/.piggy)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.piggy/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add money toward the goal
    #[command(alias = "add")]
    Deposit {
        /// Amount in dollars, e.g. 25 or 9.50
        amount: String,
    },

    /// Show the savings goal, or replace it
    Goal {
        /// New goal amount; omit to show the current goal
        amount: Option<String>,
    },

    /// Show saved amount, level, XP, and achievement count
    Status,

    /// List all achievements, locked and unlocked
    Achievements,

    /// Delete all progress and start over
    Reset {
        /// Actually delete; without this flag nothing happens
        #[arg(long)]
        force: bool,
    },

    /// Initialize a new ~/.piggy/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Deposit { amount }) => {
            let config = cli::load_config(cli.config.as_deref())?;
            let data_dir = cli::resolve_data_dir(cli.data_dir, &config);
            cli::deposit::deposit_command(&data_dir, &config, &amount)?;
        }
        Some(Commands::Goal { amount }) => {
            let config = cli::load_config(cli.config.as_deref())?;
            let data_dir = cli::resolve_data_dir(cli.data_dir, &config);
            cli::goal::goal_command(&data_dir, &config, amount.as_deref())?;
        }
        Some(Commands::Achievements) => {
            let config = cli::load_config(cli.config.as_deref())?;
            let data_dir = cli::resolve_data_dir(cli.data_dir, &config);
            cli::achievements::achievements_command(&data_dir)?;
        }
        Some(Commands::Reset { force }) => {
            let config = cli::load_config(cli.config.as_deref())?;
            let data_dir = cli::resolve_data_dir(cli.data_dir, &config);
            cli::reset::reset_command(&data_dir, force)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force)?;
        }
        Some(Commands::Status) | None => {
            // Default: show the status view
            let config = cli::load_config(cli.config.as_deref())?;
            let data_dir = cli::resolve_data_dir(cli.data_dir, &config);
            cli::status::status_command(&data_dir, &config)?;
        }
    }

    Ok(())
}

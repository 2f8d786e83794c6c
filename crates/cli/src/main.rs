//! BRGRR - build a burger from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Interactive builder (default)
//! brgrr
//!
//! # Print the menu with prices
//! brgrr menu
//!
//! # List or clear saved favorites
//! brgrr favorites list
//! brgrr favorites clear
//! ```
//!
//! # Options
//!
//! - `--data-dir` - Where favorites are kept (overrides `BRGRR_DATA_DIR`)
//! - `--confirm-delay-ms` - Pause after confirming an order (overrides `BRGRR_CONFIRM_DELAY_MS`)
//!
//! Logs go to stderr; set `RUST_LOG` to change the filter.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::time::Duration;

use brgrr_builder::{BuilderConfig, Catalog};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "brgrr")]
#[command(author, version, about = "Burger builder")]
struct Cli {
    /// Directory for saved favorites
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Pause after confirming an order, in milliseconds
    #[arg(long, global = true)]
    confirm_delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a burger interactively
    Shell,
    /// Print the menu
    Menu,
    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List saved favorites
    List,
    /// Delete all saved favorites
    Clear,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("brgrr_builder=info,brgrr_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> brgrr_builder::Result<()> {
    let mut config = BuilderConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(ms) = cli.confirm_delay_ms {
        config.confirm_delay = Duration::from_millis(ms);
    }
    tracing::debug!(?config, "Loaded configuration");

    let catalog = Catalog::standard();
    let stdout = std::io::stdout();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::run(&config, catalog, stdout.lock()).await?,
        Commands::Menu => commands::menu::print(&catalog, &mut stdout.lock())?,
        Commands::Favorites { action } => match action {
            FavoritesAction::List => {
                commands::favorites::list(&config, &catalog, &mut stdout.lock())?;
            }
            FavoritesAction::Clear => commands::favorites::clear(&config)?,
        },
    }
    Ok(())
}

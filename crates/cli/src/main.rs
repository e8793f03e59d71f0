//! QR Menu CLI - menu management and terminal ordering sessions.
//!
//! # Usage
//!
//! ```bash
//! # Show the menu guests will see
//! qr-menu menu show
//!
//! # Show only coffee, in Japanese
//! qr-menu menu show --category coffee --lang ja
//!
//! # Replace the stored menu
//! qr-menu menu import menu.yaml
//!
//! # Remove the stored menu (guests get the house menu)
//! qr-menu menu reset
//!
//! # Order from the terminal
//! qr-menu session --restaurant cafe-42
//! ```
//!
//! # Commands
//!
//! - `menu show` - Print the menu under a category filter
//! - `menu import` - Validate and store a JSON or YAML menu
//! - `menu reset` - Remove the stored menu
//! - `session` - Interactive ordering session
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default: info).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qr_menu_core::{CategoryFilter, Language};

mod commands;
mod config;
mod error;
mod render;

use config::MenuConfig;
use error::CliError;

#[derive(Parser)]
#[command(name = "qr-menu")]
#[command(author, version, about = "QR menu ordering tools")]
struct Cli {
    /// Storage document path (overrides `QR_MENU_STORAGE_PATH`)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the stored menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Start an interactive ordering session
    Session {
        /// Restaurant identifier from the QR code
        #[arg(short, long)]
        restaurant: Option<String>,

        /// UI language (en, ja, th)
        #[arg(short, long)]
        lang: Option<Language>,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Print the menu
    Show {
        /// Category filter (`all`, `coffee`, `food`, `salad`, `beverage`, `pastry`, `setMeal`)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// UI language (en, ja, th)
        #[arg(short, long)]
        lang: Option<Language>,
    },
    /// Validate and store a menu from a JSON or YAML file
    Import {
        /// Menu file (.json, .yaml or .yml)
        file: PathBuf,
    },
    /// Remove the stored menu
    Reset,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = MenuConfig::from_env()?;
    if let Some(storage) = cli.storage {
        config.storage_path = storage;
    }

    match cli.command {
        Commands::Menu { action } => match action {
            MenuAction::Show { category, lang } => {
                let stdout = std::io::stdout();
                commands::menu::show(&config, category, lang, &mut stdout.lock())?;
            }
            MenuAction::Import { file } => {
                commands::menu::import(&config, &file)?;
            }
            MenuAction::Reset => commands::menu::reset(&config)?,
        },
        Commands::Session { restaurant, lang } => {
            commands::session::run(&config, restaurant, lang)?;
        }
    }
    Ok(())
}

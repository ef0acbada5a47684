//! CLI entry point for bizdir-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bizdir-rs")]
#[command(version)]
#[command(about = "A static directory-site generator for scraped business listings", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the static site from the CSV export
    #[command(alias = "g")]
    Generate,

    /// Clean the output folder
    Clean,

    /// List loaded data (record, phone)
    List {
        /// Type of content to list
        #[arg(default_value = "record")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "bizdir_rs=debug,info"
    } else {
        "bizdir_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let bizdir = bizdir_rs::Bizdir::new(&base_dir)?;
            tracing::info!("Generating static files...");
            let pages = bizdir.generate()?;
            println!("Generated {} pages", pages);
        }

        Commands::Clean => {
            let bizdir = bizdir_rs::Bizdir::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            bizdir.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let bizdir = bizdir_rs::Bizdir::new(&base_dir)?;
            bizdir_rs::commands::list::run(&bizdir, &r#type)?;
        }

        Commands::Version => {
            println!("bizdir-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

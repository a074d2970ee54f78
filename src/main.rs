//! CLI entry point for wren-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wren_rs::content::ContentType;

#[derive(Parser)]
#[command(name = "wren-rs")]
#[command(version)]
#[command(about = "Build-time content tooling for the wren site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the front-matter records of a content type as JSON
    #[command(alias = "i")]
    Index {
        /// Content type to index (post, page)
        r#type: ContentType,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// List site content
    List {
        /// Type of content to list (post, page)
        #[arg(default_value = "post")]
        r#type: ContentType,
    },

    /// Build the route table
    #[command(alias = "r")]
    Routes {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write to the configured routes file
        #[arg(short, long, conflicts_with = "output")]
        write: bool,
    },

    /// Create a new post or page
    New {
        /// Title of the new content
        title: String,

        /// Content type to create (post, page)
        #[arg(short, long, default_value = "post")]
        r#type: ContentType,
    },

    /// Show or update persisted preferences
    Prefs {
        /// Only list English content
        #[arg(long)]
        english_only: Option<bool>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "wren_rs=debug,info"
    } else {
        "wren_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Index { r#type, pretty } => {
            let site = wren_rs::Site::new(&base_dir)?;
            wren_rs::commands::index::run(&site, r#type, pretty)?;
        }

        Commands::List { r#type } => {
            let site = wren_rs::Site::new(&base_dir)?;
            wren_rs::commands::list::run(&site, r#type)?;
        }

        Commands::Routes { output, write } => {
            let site = wren_rs::Site::new(&base_dir)?;
            let output = if write {
                Some(PathBuf::from(&site.config.routes_file))
            } else {
                output
            };
            wren_rs::commands::routes::run(&site, output.as_deref())?;
        }

        Commands::New { title, r#type } => {
            let site = wren_rs::Site::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", r#type, title);
            wren_rs::commands::new::run(&site, &title, r#type)?;
        }

        Commands::Prefs { english_only } => {
            let site = wren_rs::Site::new(&base_dir)?;
            wren_rs::commands::prefs::run(&site, english_only)?;
        }

        Commands::Version => {
            println!("wren-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

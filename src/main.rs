//! CLI entry point for koyo-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "koyo-site")]
#[command(version)]
#[command(about = "A minimal static site generator", long_about = None)]
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
    /// Initialize a new koyo-site project
    Init {
        /// Directory to initialize (defaults to the base directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Build the static site
    #[command(alias = "b")]
    Build,

    /// Build, then serve the site locally
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to server.port from the config)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List posts in index order
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "koyo_site=debug,info"
    } else {
        "koyo_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::debug!("Initializing project in {:?}", target_dir);
            koyo_site::commands::init::init_site(&target_dir)?;
        }

        Commands::Build => {
            let koyo = koyo_site::Koyo::new(&base_dir)?;
            koyo.build()?;
        }

        Commands::Serve { port, ip } => {
            let koyo = koyo_site::Koyo::new(&base_dir)?;

            // Build first so there is something to serve
            koyo.build()?;

            let port = port.unwrap_or(koyo.config.server.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            koyo_site::server::start(&koyo, &ip, port).await?;
        }

        Commands::List => {
            let koyo = koyo_site::Koyo::new(&base_dir)?;
            koyo.list()?;
        }

        Commands::Version => {
            println!("koyo-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

//! ISP Console CLI - scripted exports and summaries.
//!
//! # Usage
//!
//! ```bash
//! # Export all active customers to a file
//! ispctl export customers --status active --output customers.csv
//!
//! # Export complaints mentioning "fiber" to stdout
//! ispctl export complaints --search fiber
//!
//! # Print the dashboard headline numbers
//! ispctl summary
//! ```
//!
//! # Environment Variables
//!
//! - `ISP_API_BASE_URL` - ISP backend base URL
//! - `ISP_API_TOKEN` - Bearer token the CLI calls the backend with
//! - `ISP_API_TIMEOUT_SECS` - Per-request timeout (default 30)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::export::Entity;

#[derive(Parser)]
#[command(name = "ispctl")]
#[command(author, version, about = "ISP Console CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a filtered list as CSV
    Export {
        /// What to export
        #[arg(value_enum)]
        entity: Entity,

        /// Case-insensitive text search
        #[arg(short, long)]
        search: Option<String>,

        /// Only records with this status (`all` for every status)
        #[arg(long)]
        status: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the dashboard aggregates
    Summary,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "isp_console_cli=info,isp_console_dashboard=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Export {
            entity,
            search,
            status,
            output,
        } => {
            commands::export::run(entity, search.as_deref(), status.as_deref(), output.as_deref())
                .await?;
        }
        Commands::Summary => commands::summary::run().await?,
    }
    Ok(())
}

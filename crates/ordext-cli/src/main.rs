use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ordext_core::AppConfig;
use ordext_engine::VendorRegistry;
use tracing_subscriber::EnvFilter;

mod batch;
mod parse;
mod vendors;


#[derive(Debug, Parser)]
#[command(name = "ordext-cli")]
#[command(about = "Purchase-order extraction from order-confirmation email")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse one message fixture and print the outcome as JSON.
    Parse {
        /// Path to a `.eml`-style message file.
        file: PathBuf,
        /// Print the enrichment record (confidence, forwarding context)
        /// instead of the strict order outcome.
        #[arg(long)]
        enrich: bool,
    },
    /// Process a mailbox directory and print the store summary.
    Batch {
        /// Mailbox directory; defaults to `ORDEXT_MAILBOX_DIR`.
        #[arg(long)]
        mailbox: Option<PathBuf>,
        /// Message cap; defaults to `ORDEXT_MAX_MESSAGES_PER_RUN`.
        #[arg(long)]
        max: Option<usize>,
    },
    /// Print the active vendor registry.
    Vendors,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ordext_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let registry = build_registry(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { file, enrich } => parse::run(&registry, &file, enrich),
        Commands::Batch { mailbox, max } => batch::run(&registry, &config, mailbox, max).await,
        Commands::Vendors => {
            vendors::run(&registry);
            Ok(())
        }
    }
}

fn build_registry(config: &AppConfig) -> anyhow::Result<VendorRegistry> {
    let file = match &config.vendors_path {
        Some(path) => ordext_core::load_registry(path)?,
        None => ordext_core::builtin_registry(),
    };
    Ok(VendorRegistry::compile(&file)?)
}

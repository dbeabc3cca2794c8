//! Desktop GUI binary

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use lumo::config::{Chain, Config};

/// CLI arguments
#[derive(Parser)]
#[command(author, version, about = "Lumo wallet")]
struct Args {
    /// Chain to operate on (testnet or mainnet)
    #[arg(short, long)]
    chain: Option<Chain>,

    /// Override the wallet API base URL
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to a file; the window has no terminal attached
    let project_dirs = directories::ProjectDirs::from("", "", "lumo")
        .ok_or_else(|| anyhow::anyhow!("no home directory"))?;
    let log_path = project_dirs.data_local_dir().join("logs").join("lumo.log");
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new().create(true).append(true).open(&log_path)?;

    let status_layer = lumo::gui::init_status_layer();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(BoxMakeWriter::new(log_file))
                .with_ansi(false),
        )
        .with(status_layer)
        .init();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {:#}", e);
        eprintln!("Using default configuration");
        Config::default()
    });
    if let Some(chain) = args.chain {
        config.chain = chain;
    }
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    config.validate()?;

    lumo::gui::run(config)?;
    Ok(())
}

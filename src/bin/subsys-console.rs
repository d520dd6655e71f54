//! Subsys Console
//!
//! Interactive command loop over a single subsystem registry

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use subsys_registry::console::Console;
use subsys_registry::{Registry, RegistryConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "subsys-console")]
#[command(about = "Interactive registry of subsystem status records")]
struct Args {
    /// Path to a TOML registry config
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Maximum number of subsystems (overrides the config file)
    #[arg(short = 'n', long)]
    capacity: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with command output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RegistryConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => RegistryConfig::default(),
    };
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }

    let registry = Registry::with_config(&config).context("Invalid registry configuration")?;
    info!(
        "Starting subsys console (capacity {}, name width {})",
        registry.capacity(),
        registry.name_width()
    );

    let mut console = Console::new(registry);
    console.run(io::stdin().lock(), io::stdout().lock())?;

    info!("Exiting");
    Ok(())
}

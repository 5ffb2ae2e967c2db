use std::path::PathBuf;

use clap::Parser;

use lead_relay::config::{load_config, RelayConfig};
use lead_relay::lifecycle::startup;
use lead_relay::observability::logging;

#[derive(Parser)]
#[command(name = "lead-relay")]
#[command(about = "Validates lead submissions and forwards them to a webhook", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long, env = "LEAD_RELAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        webhook = %config.webhook.url,
        "lead-relay starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

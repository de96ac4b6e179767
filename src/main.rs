use std::process::ExitCode;

use anyhow::Result;
use crclimate::{GatewayConfig, error::startup_message, telemetry, web};

#[tokio::main]
async fn main() -> ExitCode {
    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Startup failed: {:#}", err);
            eprintln!("{}", startup_message(&err));
            ExitCode::FAILURE
        }
    }
}

async fn start() -> Result<()> {
    let config = GatewayConfig::load()?;
    telemetry::init(&config)?;

    tracing::info!("Starting Costa Rica Climate API v{}", crclimate::VERSION);
    web::run(&config).await
}

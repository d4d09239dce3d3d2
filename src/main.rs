use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tideman_bridge::utils::{logger, validation::Validate};
use tideman_bridge::{AppState, CliConfig, ElectionEngine, ProcessRunner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_server_logger(config.verbose, config.log_json);

    tracing::info!("Starting tideman-bridge");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let resolver_bin = config.resolver_bin();
    tracing::info!(
        "Using resolver binary {} (exists={})",
        resolver_bin.display(),
        resolver_bin.is_file()
    );
    if !resolver_bin.is_file() {
        tracing::warn!("Resolver binary not found; requests will fail until it appears");
    }

    let runner = ProcessRunner::new(resolver_bin, Duration::from_secs(config.timeout_secs));
    let state = AppState {
        engine: Arc::new(ElectionEngine::new(runner)),
    };

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, tideman_bridge::router(state)).await?;

    Ok(())
}

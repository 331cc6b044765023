mod app;
mod routes;
mod services;
#[cfg(test)]
mod test_utils;
mod types;
mod utils;

use std::error::Error;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("Starting app...");

    // NexTrip docs: http://svc.metrotransit.org/NexTrip/help
    let config = AppConfig::from_env()?;
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(
        "Listening on {} with upstream {}",
        listener.local_addr()?,
        config.metro_host
    );

    let app = app::gen_app(config)?;

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("Stopped");
    Ok(())
}

async fn cancel_on_ctrl_c(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        return;
    }

    info!("Shutting down...");
    shutdown.cancel();
}

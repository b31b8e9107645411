//! HTTP server for the shift pay engine.
//!
//! Reads the workplace configuration from `SHIFT_PAY_CONFIG` (default
//! `./config/workplaces.yaml`) and listens on `SHIFT_PAY_ADDR` (default
//! `0.0.0.0:3000`). Log verbosity follows `RUST_LOG`.

use std::env;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shift_pay_engine::api::{AppState, create_router};
use shift_pay_engine::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "./config/workplaces.yaml";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = env::var("SHIFT_PAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let addr = env::var("SHIFT_PAY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let config = ConfigLoader::load(&config_path)?;
    info!(
        config_path = %config_path,
        workplaces = config.workplace_ids().len(),
        "Loaded workplace configuration"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Shift pay engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}

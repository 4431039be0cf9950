//! Cambio API Server
//!
//! Main entry point for the currency exchange service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cambio_api::{AppState, create_router};
use cambio_core::{
    CodeRules, CurrencyAppService, ExchangeService, LocalCurrencyExchanger, MultiExchangeService,
};
use cambio_db::CurrencyStore;
use cambio_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cambio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Seed the currency table
    let store = CurrencyStore::seeded(&config.currencies.seed)
        .context("Invalid currency seed table")?;
    info!(currencies = store.len().await, "Currency store ready");

    // Compose the exchange pipeline
    let codes = CodeRules::from_config(&config.currencies).context("Invalid allowed currency codes")?;
    let exchanger = LocalCurrencyExchanger::new(MultiExchangeService::new(ExchangeService::new()));
    let service = CurrencyAppService::new(Arc::new(store), Arc::new(exchanger), codes);

    if config.auth.credentials().is_some() {
        info!("HTTP Basic authentication enabled");
    }

    let state = AppState::new(service, config.auth.clone());
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// Framework bootstrap for the travel server runtime.

use crate::frameworks::{catalog, config};
use crate::interface_adapters::clients::AmadeusClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::FlightSearchGateway;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // Amadeus credentials usually come from .env during local runs; deployments set them directly.
    dotenvy::dotenv().ok();
    init_tracing(config::json_logs());

    // Route panics from handlers and the token refresh through the same log sink.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "travel server panicked");
    }));
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // JSON carries the search_flights span fields for log shipping.
    if json {
        subscriber.json().with_current_span(true).init();
    } else {
        subscriber.compact().init();
    }
}

// Serve the travel API on an already bound listener.
pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = config::ServerSettings::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e.to_string())
    })?;
    let state = build_state(settings)?;

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

pub fn build_state(settings: config::ServerSettings) -> Result<Arc<AppState>> {
    let amadeus = AmadeusClient::new(
        settings.amadeus_base_url,
        settings.amadeus_credentials,
        settings.amadeus_timeout,
    )
    .map_err(|e| std::io::Error::other(format!("failed to initialize amadeus client: {e}")))?;
    tracing::debug!(
        amadeus_base_url = %amadeus.base_url(),
        amadeus_timeout_ms = settings.amadeus_timeout.as_millis(),
        token_fallback_ttl_seconds = settings.token_fallback_ttl_seconds,
        "amadeus client configured"
    );

    // One gateway per process so every request shares the cached token.
    let flights = FlightSearchGateway::new(SystemClock, amadeus)
        .with_fallback_ttl(settings.token_fallback_ttl_seconds);

    let catalog = catalog::load_embedded().map_err(|e| {
        tracing::error!(error = %e, "failed to parse destination catalog");
        std::io::Error::other(format!("invalid destination catalog: {e}"))
    })?;
    tracing::debug!(destinations = catalog.destinations.len(), "destination catalog loaded");

    Ok(Arc::new(AppState {
        flights: Arc::new(flights),
        catalog: Arc::new(catalog),
    }))
}

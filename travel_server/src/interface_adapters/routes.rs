use crate::interface_adapters::handlers::travel::{get_buses, get_flights, get_trains, health};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/health", get(health))
        .route("/api/travel/flights", get(get_flights))
        .route("/api/travel/trains", get(get_trains))
        .route("/api/travel/buses", get(get_buses))
        .with_state(state)
}

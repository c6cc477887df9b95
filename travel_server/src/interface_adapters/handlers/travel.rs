use crate::domain::errors::GatewayError;
use crate::domain::flights::FlightSummary;
use crate::interface_adapters::protocol::{
    BusOptionResponse, ErrorResponse, TrainOptionResponse, TravelQuery,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::travel_options::TravelOptionsUseCase;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use std::sync::Arc;

#[tracing::instrument(
    name = "get_flights",
    skip_all,
    fields(from = %query.from, to = %query.to, date = %query.date)
)]
pub async fn get_flights(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TravelQuery>,
) -> Result<Json<Vec<FlightSummary>>, (StatusCode, Json<ErrorResponse>)> {
    // Pilgrimage destinations are searched by their nearest airport.
    let options = TravelOptionsUseCase {
        catalog: &state.catalog,
    };
    let destination = options.resolve_airport(&query.to);

    let flights = state
        .flights
        .search_flights(&query.from, &destination, &query.date)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "flight search aborted.");
            map_gateway_error(err)
        })?;

    Ok(Json(flights))
}

#[tracing::instrument(name = "get_trains", skip_all, fields(to = %query.to))]
pub async fn get_trains(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TravelQuery>,
) -> Json<Vec<TrainOptionResponse>> {
    let options = TravelOptionsUseCase {
        catalog: &state.catalog,
    };

    let trains = options
        .trains(&query.to)
        .into_iter()
        .map(|train| TrainOptionResponse {
            name: train.name,
            train_no: train.train_no,
            price: train.price,
            from: query.from.clone(),
            to: query.to.clone(),
            date: query.date.clone(),
            link: train.link,
        })
        .collect();

    Json(trains)
}

#[tracing::instrument(name = "get_buses", skip_all, fields(to = %query.to))]
pub async fn get_buses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TravelQuery>,
) -> Json<Vec<BusOptionResponse>> {
    let options = TravelOptionsUseCase {
        catalog: &state.catalog,
    };

    let buses = options
        .buses(&query.to)
        .into_iter()
        .map(|bus| BusOptionResponse {
            operator: bus.operator,
            bus_no: bus.bus_no,
            price: bus.price,
            from: query.from.clone(),
            to: query.to.clone(),
            date: query.date.clone(),
            link: bus.link,
        })
        .collect();

    Json(buses)
}

pub async fn health() -> &'static str {
    "ok"
}

fn map_gateway_error(err: GatewayError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        GatewayError::AuthenticationFailure(_) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                message: "flight provider authentication failed".to_string(),
            }),
        ),
    }
}

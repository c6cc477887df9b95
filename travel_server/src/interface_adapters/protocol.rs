use serde::{Deserialize, Serialize};

// Query string shared by every travel lookup.
#[derive(Debug, Deserialize)]
pub struct TravelQuery {
    // Origin location code or city supplied by the client.
    pub from: String,
    // Destination name; flight lookups map it to an airport code.
    pub to: String,
    // Travel date as sent by the client (ISO date expected, not validated).
    pub date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainOptionResponse {
    pub name: String,
    pub train_no: String,
    pub price: u32,
    pub from: String,
    pub to: String,
    pub date: String,
    pub link: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusOptionResponse {
    pub operator: String,
    pub bus_no: String,
    pub price: u32,
    pub from: String,
    pub to: String,
    pub date: String,
    pub link: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::domain::errors::{SearchError, TokenError};
use crate::domain::flights::{FlightOffer, FlightQuery, IssuedToken, Itinerary, Segment};
use crate::domain::ports::FlightProvider;

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";

// Client id/secret for the client-credentials exchange.
#[derive(Clone)]
pub struct AmadeusCredentials {
    pub client_id: String,
    pub client_secret: String,
}

// Keep secrets out of logs.
impl std::fmt::Debug for AmadeusCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmadeusCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

// Thin reqwest client for the Amadeus self-service API.
#[derive(Clone)]
pub struct AmadeusClient {
    http: Client,
    base_url: String,
    credentials: AmadeusCredentials,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
}

// Offers stay raw here and are decoded one at a time, so a bad entry cannot
// take the rest of the batch down with it.
#[derive(Debug, Deserialize)]
struct OffersResponse {
    data: Vec<Value>,
}

// Every nested field is lenient so shape problems surface per offer, not per body.
#[derive(Debug, Deserialize)]
struct OfferDto {
    #[serde(default)]
    itineraries: Option<Vec<ItineraryDto>>,
    price: Option<PriceDto>,
}

#[derive(Debug, Deserialize)]
struct ItineraryDto {
    #[serde(default)]
    segments: Option<Vec<SegmentDto>>,
}

#[derive(Debug, Deserialize)]
struct SegmentDto {
    #[serde(rename = "carrierCode")]
    carrier_code: Option<String>,
    departure: Option<EndpointDto>,
    arrival: Option<EndpointDto>,
}

#[derive(Debug, Deserialize)]
struct EndpointDto {
    at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriceDto {
    total: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorsResponse {
    #[serde(default)]
    errors: Vec<ErrorDto>,
}

#[derive(Debug, Deserialize)]
struct ErrorDto {
    title: Option<String>,
    detail: Option<String>,
}

impl AmadeusClient {
    pub fn new(
        base_url: impl Into<String>,
        credentials: AmadeusCredentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FlightProvider for AmadeusClient {
    async fn request_token(&self) -> Result<IssuedToken, TokenError> {
        let url = format!("{}{TOKEN_PATH}", self.base_url);
        let res = self
            .http
            .post(url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|err| TokenError::Transport(err.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(TokenError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = res
            .json::<TokenResponse>()
            .await
            .map_err(|err| TokenError::Decode(err.to_string()))?;

        match body.access_token {
            Some(access_token) if !access_token.is_empty() => Ok(IssuedToken {
                access_token,
                expires_in: body.expires_in,
            }),
            _ => Err(TokenError::MissingAccessToken),
        }
    }

    async fn search_offers(
        &self,
        bearer_token: &str,
        query: &FlightQuery,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        let url = format!("{}{FLIGHT_OFFERS_PATH}", self.base_url);
        let params = [
            ("originLocationCode", query.origin.clone()),
            ("destinationLocationCode", query.destination.clone()),
            ("departureDate", query.departure_date.clone()),
            ("adults", query.adults.to_string()),
            ("max", query.max_results.to_string()),
        ];
        let res = self
            .http
            .get(url)
            .query(&params)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;

        let status = res.status();

        // Keep the provider's own error text for the logs.
        if !status.is_success() {
            let message = res
                .json::<ErrorsResponse>()
                .await
                .ok()
                .and_then(|payload| payload.errors.into_iter().next())
                .and_then(|error| error.detail.or(error.title));
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = res
            .json::<OffersResponse>()
            .await
            .map_err(|err| SearchError::Decode(err.to_string()))?;

        Ok(body.data.into_iter().enumerate().map(decode_offer).collect())
    }
}

// An undecodable entry becomes an empty offer, which the gateway skips as shapeless.
fn decode_offer((index, raw): (usize, Value)) -> FlightOffer {
    match serde_json::from_value::<OfferDto>(raw) {
        Ok(dto) => into_offer(dto),
        Err(err) => {
            tracing::warn!(offer_index = index, error = %err, "undecodable flight offer");
            FlightOffer::default()
        }
    }
}

fn into_offer(dto: OfferDto) -> FlightOffer {
    FlightOffer {
        itineraries: dto
            .itineraries
            .unwrap_or_default()
            .into_iter()
            .map(|itinerary| Itinerary {
                segments: itinerary
                    .segments
                    .unwrap_or_default()
                    .into_iter()
                    .map(into_segment)
                    .collect(),
            })
            .collect(),
        price_total: dto.price.and_then(|price| price.total),
    }
}

fn into_segment(dto: SegmentDto) -> Segment {
    Segment {
        carrier_code: dto.carrier_code,
        departure_at: dto.departure.and_then(|endpoint| endpoint.at),
        arrival_at: dto.arrival.and_then(|endpoint| endpoint.at),
    }
}

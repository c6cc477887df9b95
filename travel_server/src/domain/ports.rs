use async_trait::async_trait;

use crate::domain::errors::{GatewayError, SearchError, TokenError};
use crate::domain::flights::{FlightOffer, FlightQuery, FlightSummary, IssuedToken};

// Port for the third-party flight API. The gateway depends on this trait,
// not on the reqwest client.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    // Client-credentials exchange against the provider's token endpoint.
    async fn request_token(&self) -> Result<IssuedToken, TokenError>;

    async fn search_offers(
        &self,
        bearer_token: &str,
        query: &FlightQuery,
    ) -> Result<Vec<FlightOffer>, SearchError>;
}

// Port exposed to the HTTP layer.
#[async_trait]
pub trait FlightSearch: Send + Sync {
    async fn search_flights(
        &self,
        origin: &str,
        destination: &str,
        date: &str,
    ) -> Result<Vec<FlightSummary>, GatewayError>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}

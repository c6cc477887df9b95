use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::{GatewayError, OfferShapeError};
use crate::domain::flights::{AuthToken, FlightOffer, FlightQuery, FlightSummary};
use crate::domain::ports::{Clock, FlightProvider, FlightSearch};

// Token lifetime assumed when the provider does not report `expires_in`.
pub const FALLBACK_TOKEN_TTL_SECONDS: u64 = 30 * 60;

// Flight search gateway: hides provider authentication behind a cached token
// and flattens provider offers into summaries.
pub struct FlightSearchGateway<C, P> {
    pub clock: C,
    pub provider: P,
    pub fallback_ttl_seconds: u64,
    // Held across a refresh so concurrent callers share a single token exchange.
    token: Mutex<Option<AuthToken>>,
}

impl<C, P> FlightSearchGateway<C, P>
where
    C: Clock,
    P: FlightProvider,
{
    pub fn new(clock: C, provider: P) -> Self {
        Self {
            clock,
            provider,
            fallback_ttl_seconds: FALLBACK_TOKEN_TTL_SECONDS,
            token: Mutex::new(None),
        }
    }

    pub fn with_fallback_ttl(mut self, seconds: u64) -> Self {
        self.fallback_ttl_seconds = seconds;
        self
    }

    // Snapshot of the cached token, if any.
    pub async fn cached_token(&self) -> Option<AuthToken> {
        self.token.lock().await.clone()
    }

    // Return a usable bearer token, refreshing it when absent or expired.
    pub async fn ensure_authenticated(&self) -> Result<String, GatewayError> {
        let mut cached = self.token.lock().await;

        let now = self.clock.now_epoch_seconds();
        if let Some(token) = cached.as_ref().filter(|token| token.is_valid_at(now)) {
            return Ok(token.value.clone());
        }

        // Expired tokens are dropped before the exchange so a failed refresh
        // never leaves a stale value behind.
        *cached = None;

        let issued = self.provider.request_token().await.map_err(|err| {
            tracing::error!(error = %err, "flight provider token exchange failed");
            GatewayError::AuthenticationFailure(err)
        })?;

        let ttl_seconds = issued.expires_in.unwrap_or(self.fallback_ttl_seconds);
        let refreshed_at = self.clock.now_epoch_seconds();
        let token = AuthToken {
            value: issued.access_token,
            expires_at: refreshed_at.saturating_add(ttl_seconds),
        };
        tracing::debug!(
            expires_at = token.expires_at,
            ttl_seconds,
            provider_ttl = issued.expires_in.is_some(),
            "flight provider token refreshed"
        );

        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }
}

#[async_trait]
impl<C, P> FlightSearch for FlightSearchGateway<C, P>
where
    C: Clock,
    P: FlightProvider,
{
    #[tracing::instrument(name = "search_flights", skip(self))]
    async fn search_flights(
        &self,
        origin: &str,
        destination: &str,
        date: &str,
    ) -> Result<Vec<FlightSummary>, GatewayError> {
        let bearer_token = self.ensure_authenticated().await?;
        let query = FlightQuery::new(origin, destination, date);

        // Provider errors stop here: callers see "no flights" rather than a failure.
        let offers = match self.provider.search_offers(&bearer_token, &query).await {
            Ok(offers) => offers,
            Err(err) => {
                tracing::warn!(error = %err, "flight search failed; returning no flights");
                return Ok(Vec::new());
            }
        };

        let total = offers.len();
        let flights: Vec<FlightSummary> = offers
            .iter()
            .enumerate()
            .filter_map(|(index, offer)| match summarize_offer(offer) {
                Ok(summary) => Some(summary),
                Err(err) => {
                    tracing::warn!(offer_index = index, error = %err, "skipping malformed offer");
                    None
                }
            })
            .collect();

        tracing::info!(offers = total, flights = flights.len(), "flight search completed");
        Ok(flights)
    }
}

// Flatten an offer to its first itinerary's first segment plus the total price.
pub fn summarize_offer(offer: &FlightOffer) -> Result<FlightSummary, OfferShapeError> {
    let itinerary = offer.itineraries.first().ok_or(OfferShapeError::NoItinerary)?;
    let segment = itinerary.segments.first().ok_or(OfferShapeError::NoSegment)?;

    Ok(FlightSummary {
        carrier: required(&segment.carrier_code, "carrierCode")?,
        departure: required(&segment.departure_at, "departure.at")?,
        arrival: required(&segment.arrival_at, "arrival.at")?,
        price_total: required(&offer.price_total, "price.total")?,
    })
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, OfferShapeError> {
    value.clone().ok_or(OfferShapeError::MissingField(field))
}

use serde::Serialize;

// Bearer token issued by the flight provider, cached by the gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthToken {
    pub value: String,
    // Absolute expiry in epoch seconds; the token is usable while now < expires_at.
    pub expires_at: u64,
}

impl AuthToken {
    pub fn is_valid_at(&self, now: u64) -> bool {
        now < self.expires_at
    }
}

// Token as returned by the provider before the gateway stamps an expiry on it.
#[derive(Clone, Debug)]
pub struct IssuedToken {
    pub access_token: String,
    // Lifetime reported by the provider, when it reports one.
    pub expires_in: Option<u64>,
}

// One outbound flight search. Passenger count and page size are fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub adults: u32,
    pub max_results: u32,
}

impl FlightQuery {
    pub const ADULTS: u32 = 1;
    pub const MAX_RESULTS: u32 = 10;

    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date: departure_date.into(),
            adults: Self::ADULTS,
            max_results: Self::MAX_RESULTS,
        }
    }
}

// Provider offer as decoded from the wire. Every field the gateway reads is
// optional so a single malformed offer can be skipped instead of failing the batch.
#[derive(Clone, Debug, Default)]
pub struct FlightOffer {
    pub itineraries: Vec<Itinerary>,
    pub price_total: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Itinerary {
    pub segments: Vec<Segment>,
}

#[derive(Clone, Debug, Default)]
pub struct Segment {
    pub carrier_code: Option<String>,
    pub departure_at: Option<String>,
    pub arrival_at: Option<String>,
}

// The serialization within this layer is a dependency leak, but handlers
// return this shape unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlightSummary {
    pub carrier: String,
    pub departure: String,
    pub arrival: String,
    #[serde(rename = "priceTotal")]
    pub price_total: String,
}

pub mod catalog;
pub mod errors;
pub mod flights;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use catalog::{BusService, Destination, DestinationCatalog, TrainService};
pub use errors::{GatewayError, OfferShapeError, SearchError, TokenError};
pub use flights::{
    AuthToken, FlightOffer, FlightQuery, FlightSummary, IssuedToken, Itinerary, Segment,
};
pub use ports::{Clock, FlightProvider, FlightSearch};

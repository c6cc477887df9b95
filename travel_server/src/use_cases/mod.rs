pub mod search_flights;
pub mod travel_options;


pub use search_flights::{FALLBACK_TOKEN_TTL_SECONDS, FlightSearchGateway, summarize_offer};
pub use travel_options::{BusOption, TrainOption, TravelOptionsUseCase};

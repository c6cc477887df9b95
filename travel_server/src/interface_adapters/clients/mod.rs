// The clients defined here are reqwest clients for external services.
pub mod amadeus;

pub use amadeus::{AmadeusClient, AmadeusCredentials};

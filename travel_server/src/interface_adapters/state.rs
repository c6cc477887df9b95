use crate::domain::catalog::DestinationCatalog;
use crate::domain::ports::{Clock, FlightSearch};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub flights: Arc<dyn FlightSearch>,
    // Static train/bus tables and destination airports, loaded once at startup.
    pub catalog: Arc<DestinationCatalog>,
}

// System clock adapter used by the flight gateway.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

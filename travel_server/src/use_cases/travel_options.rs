use crate::domain::catalog::DestinationCatalog;

// Train option for a destination, with the booking link resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainOption {
    pub name: String,
    pub train_no: String,
    pub price: u32,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusOption {
    pub operator: String,
    pub bus_no: String,
    pub price: u32,
    pub link: String,
}

// Lookups over the static destination catalog.
pub struct TravelOptionsUseCase<'a> {
    pub catalog: &'a DestinationCatalog,
}

impl TravelOptionsUseCase<'_> {
    // Map a destination name to its airport code; unknown names pass through
    // unchanged so callers may send airport codes directly.
    pub fn resolve_airport(&self, destination: &str) -> String {
        self.catalog
            .find(destination)
            .and_then(|d| d.airport.clone())
            .unwrap_or_else(|| destination.to_string())
    }

    pub fn trains(&self, destination: &str) -> Vec<TrainOption> {
        let Some(found) = self.catalog.find(destination) else {
            return Vec::new();
        };

        found
            .trains
            .iter()
            .map(|train| TrainOption {
                name: train.name.clone(),
                train_no: train.train_no.clone(),
                price: train.price,
                link: found.train_link.clone(),
            })
            .collect()
    }

    pub fn buses(&self, destination: &str) -> Vec<BusOption> {
        let Some(found) = self.catalog.find(destination) else {
            return Vec::new();
        };

        found
            .buses
            .iter()
            .map(|bus| BusOption {
                operator: bus.operator.clone(),
                bus_no: bus.bus_no.clone(),
                price: bus.price,
                link: found.bus_link.clone(),
            })
            .collect()
    }
}

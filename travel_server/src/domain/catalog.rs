use serde::Deserialize;

const DEFAULT_TRAIN_LINK: &str = "https://www.irctc.co.in/";
const DEFAULT_BUS_LINK: &str = "https://www.redbus.in/";

// Static travel data for the supported pilgrimage destinations.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DestinationCatalog {
    #[serde(default, rename = "destination")]
    pub destinations: Vec<Destination>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Destination {
    pub name: String,
    // Nearest airport code used for flight searches.
    pub airport: Option<String>,
    #[serde(default = "default_train_link")]
    pub train_link: String,
    #[serde(default = "default_bus_link")]
    pub bus_link: String,
    #[serde(default)]
    pub trains: Vec<TrainService>,
    #[serde(default)]
    pub buses: Vec<BusService>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TrainService {
    pub name: String,
    pub train_no: String,
    pub price: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BusService {
    pub operator: String,
    pub bus_no: String,
    pub price: u32,
}

fn default_train_link() -> String {
    DEFAULT_TRAIN_LINK.to_string()
}

fn default_bus_link() -> String {
    DEFAULT_BUS_LINK.to_string()
}

impl DestinationCatalog {
    pub fn find(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }
}

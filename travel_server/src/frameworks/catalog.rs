use crate::domain::catalog::DestinationCatalog;

// Destination tables are compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/destinations.toml");

pub fn load_embedded() -> Result<DestinationCatalog, toml::de::Error> {
    parse(EMBEDDED_CATALOG)
}

pub fn parse(source: &str) -> Result<DestinationCatalog, toml::de::Error> {
    toml::from_str(source)
}

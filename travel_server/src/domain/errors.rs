use std::fmt;

// Failure to obtain a provider token. Fatal for the current request.
#[derive(Debug)]
pub enum TokenError {
    Transport(String),
    Upstream { status: u16 },
    MissingAccessToken,
    Decode(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Transport(err) => write!(f, "token transport error: {err}"),
            TokenError::Upstream { status } => write!(f, "token endpoint returned {status}"),
            TokenError::MissingAccessToken => write!(f, "token response has no access_token"),
            TokenError::Decode(err) => write!(f, "token response decode error: {err}"),
        }
    }
}

impl std::error::Error for TokenError {}

// Failure of the search call itself. Logged by the gateway, never returned to callers.
#[derive(Debug)]
pub enum SearchError {
    Transport(String),
    Upstream {
        status: u16,
        message: Option<String>,
    },
    Decode(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Transport(err) => write!(f, "search transport error: {err}"),
            SearchError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "search upstream error {status}: {message}")
                } else {
                    write!(f, "search upstream error {status}")
                }
            }
            SearchError::Decode(err) => write!(f, "search response decode error: {err}"),
        }
    }
}

impl std::error::Error for SearchError {}

// Reason a single offer could not be flattened into a summary.
#[derive(Debug, PartialEq, Eq)]
pub enum OfferShapeError {
    NoItinerary,
    NoSegment,
    MissingField(&'static str),
}

impl fmt::Display for OfferShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferShapeError::NoItinerary => write!(f, "offer has no itineraries"),
            OfferShapeError::NoSegment => write!(f, "first itinerary has no segments"),
            OfferShapeError::MissingField(field) => write!(f, "offer is missing {field}"),
        }
    }
}

impl std::error::Error for OfferShapeError {}

// Errors the gateway surfaces to its callers.
#[derive(Debug)]
pub enum GatewayError {
    AuthenticationFailure(TokenError),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::AuthenticationFailure(err) => {
                write!(f, "flight provider authentication failed: {err}")
            }
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::AuthenticationFailure(err) => Some(err),
        }
    }
}

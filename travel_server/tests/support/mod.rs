// Stub flight provider served over real HTTP so the reqwest client is exercised end to end.
#![allow(dead_code)]

use axum::{
    Form, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use travel_server::interface_adapters::clients::{AmadeusClient, AmadeusCredentials};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";

// Canned HTTP reply returned by a stub endpoint.
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub struct StubState {
    token_calls: AtomicUsize,
    search_calls: AtomicUsize,
    token_reply: Mutex<Reply>,
    search_reply: Mutex<Reply>,
    // Last request seen by each endpoint, for assertions.
    last_form: Mutex<Option<HashMap<String, String>>>,
    last_query: Mutex<Option<HashMap<String, String>>>,
    last_authorization: Mutex<Option<String>>,
}

impl StubState {
    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn set_token_reply(&self, reply: Reply) {
        *self.token_reply.lock().expect("token reply mutex poisoned") = reply;
    }

    pub fn set_search_reply(&self, reply: Reply) {
        *self.search_reply.lock().expect("search reply mutex poisoned") = reply;
    }

    pub fn last_form(&self) -> Option<HashMap<String, String>> {
        self.last_form.lock().expect("form mutex poisoned").clone()
    }

    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.last_query.lock().expect("query mutex poisoned").clone()
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization
            .lock()
            .expect("authorization mutex poisoned")
            .clone()
    }
}

pub struct StubProvider {
    pub base_url: String,
    pub state: Arc<StubState>,
}

pub fn token_body(access_token: &str) -> String {
    serde_json::json!({
        "type": "amadeusOAuth2Token",
        "access_token": access_token,
        "token_type": "Bearer"
    })
    .to_string()
}

// Single DEL -> DED offer used across tests.
pub fn single_offer_body() -> String {
    serde_json::json!({
        "meta": { "count": 1 },
        "data": [{
            "type": "flight-offer",
            "itineraries": [{
                "segments": [{
                    "carrierCode": "AI",
                    "departure": { "iataCode": "DEL", "at": "2024-03-15T08:00:00" },
                    "arrival": { "iataCode": "DED", "at": "2024-03-15T09:30:00" }
                }]
            }],
            "price": { "currency": "INR", "total": "4500" }
        }]
    })
    .to_string()
}

// Boot the stub on an ephemeral port inside the current test runtime.
pub async fn start_stub_provider(token_reply: Reply, search_reply: Reply) -> StubProvider {
    let state = Arc::new(StubState {
        token_calls: AtomicUsize::new(0),
        search_calls: AtomicUsize::new(0),
        token_reply: Mutex::new(token_reply),
        search_reply: Mutex::new(search_reply),
        last_form: Mutex::new(None),
        last_query: Mutex::new(None),
        last_authorization: Mutex::new(None),
    });

    let app = Router::new()
        .route("/v1/security/oauth2/token", post(token))
        .route("/v2/shopping/flight-offers", get(flight_offers))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral stub port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    StubProvider {
        base_url: format!("http://{addr}"),
        state,
    }
}

// An address that refuses connections: bind, read the port, then drop the listener.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn amadeus_client(base_url: &str) -> AmadeusClient {
    AmadeusClient::new(
        base_url,
        AmadeusCredentials {
            client_id: CLIENT_ID.to_string(),
            client_secret: CLIENT_SECRET.to_string(),
        },
        Duration::from_secs(2),
    )
    .expect("build amadeus client")
}

async fn token(
    State(state): State<Arc<StubState>>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.token_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_form.lock().expect("form mutex poisoned") = Some(form);
    let reply = state.token_reply.lock().expect("token reply mutex poisoned").clone();
    json_reply(reply)
}

async fn flight_offers(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.search_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().expect("query mutex poisoned") = Some(query);
    *state
        .last_authorization
        .lock()
        .expect("authorization mutex poisoned") = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let reply = state.search_reply.lock().expect("search reply mutex poisoned").clone();
    json_reply(reply)
}

fn json_reply(reply: Reply) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body)
}

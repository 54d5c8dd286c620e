use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const FIND_PLACE_PATH: &str = "/maps/api/place/findplacefromtext/json";
pub const NEARBY_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";
pub const TEXT_SEARCH_PATH: &str = "/maps/api/place/textsearch/json";
pub const PLACE_DETAILS_PATH: &str = "/maps/api/place/details/json";
pub const PLACE_PHOTOS_PATH: &str = "/maps/api/place/photo";
pub const PLACE_AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";
pub const QUERY_AUTOCOMPLETE_PATH: &str = "/maps/api/place/queryautocomplete/json";
pub const RECORDED_PATH: &str = "/_requests";

/// JPEG SOI/EOI markers; enough for a client to see image bytes.
pub const PHOTO_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xFF, 0xD9];

/// Server settings read once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockConfig {
    /// When set, every request must carry `key=<api_key>`.
    pub api_key: Option<String>,
}

impl MockConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("PLACES_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }

    fn accepts(&self, query: &[(String, String)]) -> bool {
        let Some(expected) = &self.api_key else {
            return true;
        };
        query.iter().any(|(k, v)| k == "key" && v == expected)
    }
}

/// One request as the server received it, query pairs in arrival order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

pub type Log = Arc<RwLock<Vec<RecordedRequest>>>;

#[derive(Clone)]
struct AppState {
    config: Arc<MockConfig>,
    log: Log,
}

type Params = Query<Vec<(String, String)>>;

pub fn app() -> Router {
    app_with_config(MockConfig::default())
}

pub fn app_with_config(config: MockConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
        log: Arc::new(RwLock::new(Vec::new())),
    };
    Router::new()
        .route(FIND_PLACE_PATH, get(find_place))
        .route(NEARBY_SEARCH_PATH, get(search))
        .route(TEXT_SEARCH_PATH, get(search))
        .route(PLACE_DETAILS_PATH, get(place_details))
        .route(PLACE_PHOTOS_PATH, get(place_photo))
        .route(PLACE_AUTOCOMPLETE_PATH, get(autocomplete))
        .route(QUERY_AUTOCOMPLETE_PATH, get(autocomplete))
        .route(RECORDED_PATH, get(recorded))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_config(listener: TcpListener, config: MockConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_config(config)).await
}

async fn record(state: &AppState, uri: &Uri, query: &[(String, String)]) {
    tracing::info!(path = uri.path(), params = query.len(), "recorded request");
    state.log.write().await.push(RecordedRequest {
        path: uri.path().to_string(),
        query: query.to_vec(),
    });
}

async fn respond(state: AppState, uri: Uri, query: Vec<(String, String)>, body: Value) -> Json<Value> {
    record(&state, &uri, &query).await;
    if !state.config.accepts(&query) {
        return Json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
        }));
    }
    Json(body)
}

async fn find_place(State(state): State<AppState>, uri: Uri, Query(query): Params) -> Json<Value> {
    respond(state, uri, query, json!({ "status": "OK", "candidates": [] })).await
}

async fn search(State(state): State<AppState>, uri: Uri, Query(query): Params) -> Json<Value> {
    let body = json!({ "html_attributions": [], "results": [], "status": "OK" });
    respond(state, uri, query, body).await
}

async fn place_details(State(state): State<AppState>, uri: Uri, Query(query): Params) -> Json<Value> {
    let body = json!({ "html_attributions": [], "result": {}, "status": "OK" });
    respond(state, uri, query, body).await
}

async fn autocomplete(State(state): State<AppState>, uri: Uri, Query(query): Params) -> Json<Value> {
    respond(state, uri, query, json!({ "predictions": [], "status": "OK" })).await
}

async fn place_photo(State(state): State<AppState>, uri: Uri, Query(query): Params) -> Response {
    record(&state, &uri, &query).await;
    if !state.config.accepts(&query) {
        return StatusCode::FORBIDDEN.into_response();
    }
    ([(header::CONTENT_TYPE, "image/jpeg")], PHOTO_BYTES).into_response()
}

async fn recorded(State(state): State<AppState>) -> Json<Vec<RecordedRequest>> {
    Json(state.log.read().await.clone())
}

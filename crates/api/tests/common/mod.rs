#![allow(dead_code)] // each test binary uses its own subset of helpers

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use flatprice_api::config::ServerConfig;
use flatprice_api::routes;
use flatprice_api::state::AppState;
use flatprice_core::FlatRecord;
use flatprice_inference::{
    FeatureTransformer, InferenceError, ModelRegistry, PriceModel, PricePipeline,
};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        model_dir: "models".into(),
    }
}

// ---------------------------------------------------------------------------
// Stub pipelines (no real artifacts in tests)
// ---------------------------------------------------------------------------

/// Stub transformer: one feature per column via the fixed encoding.
struct StubTransformer;

impl FeatureTransformer for StubTransformer {
    fn transform(&self, record: &FlatRecord) -> Result<Vec<f32>, InferenceError> {
        Ok(record
            .cells()
            .iter()
            .map(|(_, cell)| match cell {
                flatprice_core::Cell::Number(v) => *v as f32,
                flatprice_core::Cell::Category { indicator, .. } => *indicator,
            })
            .collect())
    }
}

/// Stub model: fixed score regardless of input.
struct StubModel(f64);

impl PriceModel for StubModel {
    fn predict(&self, _features: &[f32]) -> Result<f64, InferenceError> {
        Ok(self.0)
    }
}

/// Stub model that always fails, for exercising the error path.
struct BrokenModel;

impl PriceModel for BrokenModel {
    fn predict(&self, _features: &[f32]) -> Result<f64, InferenceError> {
        Err(InferenceError::EmptyOutput)
    }
}

fn stub_pipeline(score: f64) -> PricePipeline {
    PricePipeline::new(Box::new(StubTransformer), Box::new(StubModel(score)))
}

/// Registry whose two pipelines return `exp(score)` for the given scores.
pub fn stub_registry(unfurnished_score: f64, furnished_score: f64) -> ModelRegistry {
    ModelRegistry::from_pipelines(
        stub_pipeline(unfurnished_score),
        stub_pipeline(furnished_score),
    )
}

/// Registry whose pipelines fail on every predict call.
pub fn broken_registry() -> ModelRegistry {
    ModelRegistry::from_pipelines(
        PricePipeline::new(Box::new(StubTransformer), Box::new(BrokenModel)),
        PricePipeline::new(Box::new(StubTransformer), Box::new(BrokenModel)),
    )
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router with all middleware layers, using the
/// given model registry.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(registry: ModelRegistry) -> Router {
    let config = test_config();

    let state = AppState {
        registry: Arc::new(registry),
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::form::router())
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app and return the response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a JSON POST request to the app and return the response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

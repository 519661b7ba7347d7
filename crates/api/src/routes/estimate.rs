//! Route definitions for flat price estimation.

use axum::routing::post;
use axum::Router;

use crate::handlers::estimate;
use crate::state::AppState;

/// Estimation routes mounted at `/estimates`.
///
/// ```text
/// POST /    -> estimate_flat
/// ```
pub fn estimate_router() -> Router<AppState> {
    Router::new().route("/", post(estimate::estimate_flat))
}

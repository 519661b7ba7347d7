pub mod estimate;
pub mod form;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /estimates    POST -> estimate_flat
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/estimates", estimate::estimate_router())
}

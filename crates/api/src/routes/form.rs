//! The single-page estimation form, embedded at build time.

use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

const FORM_PAGE: &str = include_str!("../../assets/index.html");

/// GET / -- serve the estimation form.
async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(form_page))
}

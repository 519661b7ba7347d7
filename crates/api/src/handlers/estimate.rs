//! Handler for the flat price estimation endpoint.
//!
//! Assembles the single-row feature table from the submitted form values,
//! runs it through the category's transform-then-predict pipeline, and
//! formats the result with Indian digit grouping.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use flatprice_core::{format_inr, FlatCategory, FurnishedFlat, UnfurnishedFlat};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Estimation request: the category tag selects which field schema and
/// which model/transformer pair apply.
#[derive(Debug, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EstimateRequest {
    Unfurnished(UnfurnishedFlat),
    Furnished(FurnishedFlat),
}

/// Estimation response: the raw price plus its display forms.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    /// Price in rupees, after inverting the log transform.
    pub price: f64,
    /// Indian-grouped digit string, e.g. `12,34,567`.
    pub formatted: String,
    /// The string the form renders, e.g. `₹ 12,34,567`.
    pub display: String,
}

// ---------------------------------------------------------------------------
// POST /estimates — compute a price estimate
// ---------------------------------------------------------------------------

/// Estimate the price of one flat.
///
/// No numeric range re-validation happens here (the form widget's minimums
/// are the only guard); a record the transformer rejects surfaces as a
/// generic inference failure.
pub async fn estimate_flat(
    State(state): State<AppState>,
    Json(body): Json<EstimateRequest>,
) -> AppResult<impl IntoResponse> {
    let (category, record) = match &body {
        EstimateRequest::Unfurnished(flat) => (FlatCategory::Unfurnished, flat.to_record()),
        EstimateRequest::Furnished(flat) => (FlatCategory::Furnished, flat.to_record()),
    };

    let price = state.registry.pipeline(category).estimate(&record)?;

    let formatted = format_inr(price);
    let display = format!("₹ {formatted}");

    tracing::debug!(category = category.label(), price, "Estimated flat price");

    Ok(Json(DataResponse {
        data: EstimateResponse {
            price,
            formatted,
            display,
        },
    }))
}

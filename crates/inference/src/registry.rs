//! Startup-loaded registry of the four pre-fit artifacts.

use std::path::Path;

use flatprice_core::FlatCategory;

use crate::error::InferenceError;
use crate::onnx::{OnnxModel, OnnxTransformer};
use crate::pipeline::PricePipeline;

// ---------------------------------------------------------------------------
// Artifact file names
// ---------------------------------------------------------------------------

// Stems match the original pickled artifacts, re-exported to ONNX.
pub const FURNISHED_MODEL_FILE: &str = "furnished_xgbregressor.onnx";
pub const FURNISHED_TRANSFORMER_FILE: &str = "furnished_transformer.onnx";
pub const UNFURNISHED_MODEL_FILE: &str = "unfurnished_randomforest.onnx";
pub const UNFURNISHED_TRANSFORMER_FILE: &str = "unfurnished_transformer.onnx";

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Both category pipelines, loaded once at process start and shared
/// read-only by all requests for the process lifetime.
///
/// Constructed explicitly and injected into the request state rather than
/// held as a global, so handlers can be exercised with stub pipelines.
pub struct ModelRegistry {
    unfurnished: PricePipeline,
    furnished: PricePipeline,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry").finish_non_exhaustive()
    }
}

impl ModelRegistry {
    /// Load all four ONNX artifacts from `model_dir`.
    ///
    /// Any load failure is returned as-is; the caller (the binary
    /// entrypoint) treats it as fatal before the server ever binds.
    pub fn load(model_dir: &Path) -> Result<Self, InferenceError> {
        let unfurnished = PricePipeline::new(
            Box::new(OnnxTransformer::load(
                &model_dir.join(UNFURNISHED_TRANSFORMER_FILE),
            )?),
            Box::new(OnnxModel::load(&model_dir.join(UNFURNISHED_MODEL_FILE))?),
        );

        let furnished = PricePipeline::new(
            Box::new(OnnxTransformer::load(
                &model_dir.join(FURNISHED_TRANSFORMER_FILE),
            )?),
            Box::new(OnnxModel::load(&model_dir.join(FURNISHED_MODEL_FILE))?),
        );

        tracing::info!(dir = %model_dir.display(), "Model registry loaded (4 artifacts)");

        Ok(Self {
            unfurnished,
            furnished,
        })
    }

    /// Build a registry from arbitrary pipelines (stub implementations in
    /// tests, ONNX in production).
    pub fn from_pipelines(unfurnished: PricePipeline, furnished: PricePipeline) -> Self {
        Self {
            unfurnished,
            furnished,
        }
    }

    /// The pipeline matching a flat category.
    pub fn pipeline(&self, category: FlatCategory) -> &PricePipeline {
        match category {
            FlatCategory::Unfurnished => &self.unfurnished,
            FlatCategory::Furnished => &self.furnished,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

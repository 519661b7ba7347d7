//! The transform-then-predict pipeline and its trait seam.

use flatprice_core::FlatRecord;

use crate::error::InferenceError;

// ---------------------------------------------------------------------------
// Trait seam
// ---------------------------------------------------------------------------

/// A pre-fit feature transformer: maps a raw single-row record to the
/// numeric feature vector the paired model expects.
///
/// Object-safe so tests can substitute a stub for the real artifact.
pub trait FeatureTransformer: Send + Sync {
    fn transform(&self, record: &FlatRecord) -> Result<Vec<f32>, InferenceError>;
}

/// A pre-fit regression model: maps a feature vector to a scalar score.
pub trait PriceModel: Send + Sync {
    fn predict(&self, features: &[f32]) -> Result<f64, InferenceError>;
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// One transformer/model pair plus the output inversion.
///
/// The training target is assumed to have been natural-log transformed, so
/// the raw model score is exponentiated to recover rupees. That assumption
/// comes from the original system and is preserved here, not re-derived.
pub struct PricePipeline {
    transformer: Box<dyn FeatureTransformer>,
    model: Box<dyn PriceModel>,
}

impl PricePipeline {
    pub fn new(transformer: Box<dyn FeatureTransformer>, model: Box<dyn PriceModel>) -> Self {
        Self { transformer, model }
    }

    /// Run `transform`, `predict`, then `exp` to produce a price in rupees.
    ///
    /// Any failure inside the artifacts propagates untranslated; there is
    /// no validation layer in front of the transformer.
    pub fn estimate(&self, record: &FlatRecord) -> Result<f64, InferenceError> {
        let features = self.transformer.transform(record)?;
        let score = self.model.predict(&features)?;
        Ok(score.exp())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

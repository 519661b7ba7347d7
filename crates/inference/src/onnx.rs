//! ONNX-backed implementations of the transformer and model traits.
//!
//! The original artifacts are pickled scikit-learn/xgboost objects; this
//! runtime expects them re-exported to ONNX with the same transform/predict
//! split. Each artifact becomes one `ort` session. Sessions are built with a
//! single intra-op thread so repeated identical calls are bit-identical.

use std::path::Path;
use std::sync::Mutex;

use flatprice_core::{Cell, FlatRecord};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;

use crate::error::InferenceError;
use crate::pipeline::{FeatureTransformer, PriceModel};

// ---------------------------------------------------------------------------
// Session wrapper
// ---------------------------------------------------------------------------

/// One loaded ONNX session plus the name of its first output tensor.
///
/// `run` needs exclusive access to the session, so it sits behind a `Mutex`;
/// the session itself is never mutated after load in any way visible to
/// callers.
struct OnnxSession {
    session: Mutex<Session>,
    output_name: String,
}

fn build_session(path: &Path) -> Result<Session, ort::Error> {
    Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(1)?
        .commit_from_file(path)
}

impl OnnxSession {
    fn load(path: &Path) -> Result<Self, InferenceError> {
        let session = build_session(path).map_err(|source| InferenceError::ArtifactLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let output_name = session
            .outputs()
            .first()
            .map(|output| output.name().to_string())
            .ok_or_else(|| InferenceError::MissingOutput("<first output>".to_string()))?;

        tracing::info!(path = %path.display(), output = %output_name, "Loaded ONNX artifact");

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }

    /// Feed a single-row f32 tensor through the session and return the
    /// flattened f32 output.
    fn run_vector(&self, input: Vec<f32>) -> Result<Vec<f32>, InferenceError> {
        let width = input.len();
        let array = Array2::<f32>::from_shape_vec((1, width), input)?;
        let tensor = Value::from_array(array)?;

        let mut session = self.session.lock().map_err(|_| InferenceError::Poisoned)?;
        let outputs = session.run(ort::inputs![tensor])?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| InferenceError::MissingOutput(self.output_name.clone()))?;
        let (_, data) = output.try_extract_tensor::<f32>()?;

        Ok(data.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Record encoding
// ---------------------------------------------------------------------------

/// Flatten a record into the f32 row the transformer artifact consumes.
///
/// Numeric cells pass through; category cells cross the boundary as their
/// fixed 0/1 indicators. Learned encoding and scaling stay inside the
/// transformer artifact itself.
fn encode_record(record: &FlatRecord) -> Vec<f32> {
    record
        .cells()
        .iter()
        .map(|(_, cell)| match cell {
            Cell::Number(value) => *value as f32,
            Cell::Category { indicator, .. } => *indicator,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Trait implementations
// ---------------------------------------------------------------------------

/// Pre-fit feature transformer loaded from an ONNX artifact.
pub struct OnnxTransformer {
    session: OnnxSession,
}

impl OnnxTransformer {
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        Ok(Self {
            session: OnnxSession::load(path)?,
        })
    }
}

impl FeatureTransformer for OnnxTransformer {
    fn transform(&self, record: &FlatRecord) -> Result<Vec<f32>, InferenceError> {
        self.session.run_vector(encode_record(record))
    }
}

/// Pre-fit regression model loaded from an ONNX artifact.
pub struct OnnxModel {
    session: OnnxSession,
}

impl OnnxModel {
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        Ok(Self {
            session: OnnxSession::load(path)?,
        })
    }
}

impl PriceModel for OnnxModel {
    fn predict(&self, features: &[f32]) -> Result<f64, InferenceError> {
        let output = self.session.run_vector(features.to_vec())?;
        output
            .first()
            .map(|score| *score as f64)
            .ok_or(InferenceError::EmptyOutput)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

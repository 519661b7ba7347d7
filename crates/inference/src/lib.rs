//! Inference seam for the flat price estimator.
//!
//! Defines the narrow [`FeatureTransformer`]/[`PriceModel`] interface the
//! rest of the system programs against, the ONNX-backed implementations of
//! both, and the [`ModelRegistry`] that loads all four pre-fit artifacts
//! once at startup and holds them as immutable shared state.

pub mod error;
pub mod onnx;
pub mod pipeline;
pub mod registry;

pub use error::InferenceError;
pub use onnx::{OnnxModel, OnnxTransformer};
pub use pipeline::{FeatureTransformer, PriceModel, PricePipeline};
pub use registry::ModelRegistry;

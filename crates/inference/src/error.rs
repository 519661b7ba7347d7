use std::path::PathBuf;

/// Errors from artifact loading and the transform/predict calls.
///
/// There is deliberately no retry or fallback behind any of these: a load
/// failure is fatal at startup, and a runtime failure propagates to the
/// caller untranslated.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// An artifact file could not be loaded into a session.
    #[error("Failed to load model artifact {path}: {source}")]
    ArtifactLoad {
        path: PathBuf,
        #[source]
        source: ort::Error,
    },

    /// The ONNX runtime rejected the call (schema mismatch, bad tensor
    /// shape, unexpected dtype).
    #[error("Inference runtime error: {0}")]
    Runtime(#[from] ort::Error),

    /// The input record could not be shaped into a tensor.
    #[error("Failed to build input tensor: {0}")]
    InputShape(#[from] ndarray::ShapeError),

    /// The session produced no usable output tensor.
    #[error("Model produced no output named {0:?}")]
    MissingOutput(String),

    /// The output tensor was empty where a scalar was expected.
    #[error("Model returned an empty output tensor")]
    EmptyOutput,

    /// A session lock was poisoned by a panic on another thread.
    #[error("Inference session lock poisoned")]
    Poisoned,
}

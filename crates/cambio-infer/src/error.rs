use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    /// The model asset is absent or cannot be parsed.
    ModelLoad(String),
    Io(String),
    Candle(String),
    BackendError(String),
    Shape(String),
    InvalidInput {
        name: String,
        expected_names: Vec<String>,
    },
    /// The model produced a different number of scores than the configured class count.
    OutputMismatch { expected: usize, got: usize },
    UnsupportedDevice(Device),
    UnknownDevice(String),
    UnknownBackend(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
            InferError::Candle(msg) => write!(f, "candle error: {msg}"),
            InferError::BackendError(msg) => write!(f, "backend error: {msg}"),
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::InvalidInput {
                name,
                expected_names,
            } => write!(
                f,
                "invalid input '{name}', model expects one of {expected_names:?}"
            ),
            InferError::OutputMismatch { expected, got } => write!(
                f,
                "model produced {got} scores but {expected} classes are configured"
            ),
            InferError::UnsupportedDevice(device) => {
                write!(f, "device {device} is not supported by this build")
            }
            InferError::UnknownDevice(name) => write!(f, "unknown device '{name}'"),
            InferError::UnknownBackend(name) => write!(f, "unknown backend '{name}'"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<candle_core::Error> for InferError {
    fn from(err: candle_core::Error) -> Self {
        InferError::Candle(err.to_string())
    }
}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<cambio_base::TensorError> for InferError {
    fn from(err: cambio_base::TensorError) -> Self {
        InferError::Shape(err.to_string())
    }
}

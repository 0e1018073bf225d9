use cambio_image::ImageError;
use cambio_infer::InferError;
use std::fmt;

/// Fatal startup failures. No classification is possible after one of these.
#[derive(Debug)]
pub enum LoadError {
    Config(String),
    Model(InferError),
    Labels(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Config(msg) => write!(f, "config error: {msg}"),
            LoadError::Model(err) => write!(f, "model error: {err}"),
            LoadError::Labels(msg) => write!(f, "label table error: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<InferError> for LoadError {
    fn from(err: InferError) -> Self {
        LoadError::Model(err)
    }
}

#[derive(Debug)]
pub enum CaptureError {
    Device(String),
    Io(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Device(msg) => write!(f, "camera error: {msg}"),
            CaptureError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::Io(err.to_string())
    }
}

/// The pipeline stage a classification failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Capture,
    Decode,
    Inference,
    Worker,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Capture => write!(f, "capture"),
            Stage::Decode => write!(f, "decode"),
            Stage::Inference => write!(f, "inference"),
            Stage::Worker => write!(f, "worker"),
        }
    }
}

/// A failed classification. Recoverable: the pipeline stays usable.
#[derive(Debug)]
pub enum PipelineError {
    Capture(CaptureError),
    Decode(ImageError),
    Inference(InferError),
    /// The pipeline was shut down before the request ran.
    Closed,
    Worker(String),
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Capture(_) => Stage::Capture,
            PipelineError::Decode(_) => Stage::Decode,
            PipelineError::Inference(_) => Stage::Inference,
            PipelineError::Closed | PipelineError::Worker(_) => Stage::Worker,
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Capture(err) => write!(f, "capture failed: {err}"),
            PipelineError::Decode(err) => write!(f, "decode failed: {err}"),
            PipelineError::Inference(err) => write!(f, "inference failed: {err}"),
            PipelineError::Closed => write!(f, "pipeline is shut down"),
            PipelineError::Worker(msg) => write!(f, "worker failed: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<CaptureError> for PipelineError {
    fn from(err: CaptureError) -> Self {
        PipelineError::Capture(err)
    }
}

impl From<ImageError> for PipelineError {
    fn from(err: ImageError) -> Self {
        PipelineError::Decode(err)
    }
}

impl From<InferError> for PipelineError {
    fn from(err: InferError) -> Self {
        PipelineError::Inference(err)
    }
}

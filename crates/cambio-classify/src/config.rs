use crate::LoadError;
use cambio_infer::Device;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CLASS_COUNT: usize = 6;
pub const DEFAULT_UNKNOWN_LABEL: &str = "Unknown currency";

/// Startup configuration for a [`Classifier`](crate::Classifier).
///
/// Deserializes from JSON; absent fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    model: PathBuf,
    labels: PathBuf,
    backend: String,
    device: String,
    class_count: usize,
    unknown_label: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from("model.safetensors"),
            labels: PathBuf::from("labels.txt"),
            backend: "candle".to_string(),
            device: "cpu".to_string(),
            class_count: DEFAULT_CLASS_COUNT,
            unknown_label: DEFAULT_UNKNOWN_LABEL.to_string(),
        }
    }
}

impl ClassifierConfig {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::Config(e.to_string()))
    }

    /// Read a JSON config file. Relative asset paths are resolved against the
    /// file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| LoadError::Config(format!("failed to read {}: {e}", path.display())))?;
        let mut config = Self::from_json(&json)?;
        if let Some(dir) = path.parent() {
            config.model = dir.join(&config.model);
            config.labels = dir.join(&config.labels);
        }
        Ok(config)
    }

    /// Set the serialized model path.
    pub fn with_model(mut self, model: impl Into<PathBuf>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the newline-delimited label file path.
    pub fn with_labels(mut self, labels: impl Into<PathBuf>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Set the inference backend by registry name (`candle`, `onnx`).
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = backend.into();
        self
    }

    /// Set the device (`cpu`, `cuda`, `cuda:N`).
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    pub fn with_class_count(mut self, class_count: usize) -> Self {
        self.class_count = class_count;
        self
    }

    /// Set the text announced when no label can be resolved.
    pub fn with_unknown_label(mut self, unknown_label: impl Into<String>) -> Self {
        self.unknown_label = unknown_label.into();
        self
    }

    pub fn model(&self) -> &Path {
        &self.model
    }

    pub fn labels(&self) -> &Path {
        &self.labels
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub fn device(&self) -> Result<Device, LoadError> {
        self.device
            .parse()
            .map_err(|e: cambio_infer::InferError| LoadError::Config(e.to_string()))
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn unknown_label(&self) -> &str {
        &self.unknown_label
    }
}

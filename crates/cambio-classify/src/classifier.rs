use crate::{
    ClassificationResult, ClassifierConfig, LabelTable, LoadError, PipelineError,
    DEFAULT_UNKNOWN_LABEL, preprocess, resolve,
};
use cambio_image::{Frame, decode_frame};
use cambio_infer::{BackendRegistry, InferenceEngine, ModelSource, create_registry};
use std::time::Instant;

/// Decode, preprocess, infer and resolve, synchronously on the calling thread.
///
/// Owns the loaded engine and label table; both are loaded once and reused for
/// every call. Taking `&mut self` allows one inference at a time per engine.
#[derive(Debug)]
pub struct Classifier {
    engine: InferenceEngine,
    labels: LabelTable,
    unknown_label: String,
}

impl Classifier {
    pub fn new(engine: InferenceEngine, labels: LabelTable) -> Self {
        if labels.len() != engine.class_count() {
            log::warn!(
                "label table has {} entries but the model scores {} classes",
                labels.len(),
                engine.class_count()
            );
        }
        Self {
            engine,
            labels,
            unknown_label: DEFAULT_UNKNOWN_LABEL.to_string(),
        }
    }

    pub fn with_unknown_label(mut self, unknown_label: impl Into<String>) -> Self {
        self.unknown_label = unknown_label.into();
        self
    }

    /// Load model and labels with every backend compiled into this build.
    pub fn load(config: &ClassifierConfig) -> Result<Self, LoadError> {
        Self::load_with(&create_registry(), config)
    }

    pub fn load_with(registry: &BackendRegistry, config: &ClassifierConfig) -> Result<Self, LoadError> {
        let backend = registry.require(config.backend())?;
        let device = config.device()?;
        let labels = LabelTable::load(config.labels())?;
        let engine = InferenceEngine::load(
            backend,
            ModelSource::File(config.model().to_path_buf()),
            device,
            config.class_count(),
        )?;
        Ok(Self::new(engine, labels).with_unknown_label(config.unknown_label()))
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn unknown_label(&self) -> &str {
        &self.unknown_label
    }

    /// Decode captured bytes into a frame, e.g. to show it next to the result.
    pub fn decode(&self, data: &[u8]) -> Result<Frame, PipelineError> {
        Ok(decode_frame(data)?)
    }

    pub fn classify(&mut self, data: &[u8]) -> Result<ClassificationResult, PipelineError> {
        let frame = self.decode(data)?;
        self.classify_frame(&frame)
    }

    pub fn classify_frame(&mut self, frame: &Frame) -> Result<ClassificationResult, PipelineError> {
        let start = Instant::now();
        let tensor = preprocess(frame);
        let preprocessed = start.elapsed();

        let scores = self.engine.infer(&tensor)?;
        let inferred = start.elapsed();

        let result = resolve(&scores, &self.labels);
        log::debug!(
            "classified {}x{} frame as {} (preprocess {:?}, inference {:?}, scores {:?})",
            frame.width(),
            frame.height(),
            result,
            preprocessed,
            inferred - preprocessed,
            scores.as_slice()
        );
        Ok(result)
    }
}

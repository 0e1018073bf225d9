use crate::{Backend, Device, InferError, InputTensor, ModelSource, ScoreVector, Session};

/// A loaded classification model.
///
/// Load once and reuse: every `infer` call runs the same session. The engine
/// needs `&mut self` to run, so a single owner serializes all inference.
/// Dropping it releases the backend's native resources.
pub struct InferenceEngine {
    session: Box<dyn Session>,
    backend: String,
    input_name: String,
    output_name: String,
    class_count: usize,
}

impl std::fmt::Debug for InferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceEngine")
            .field("backend", &self.backend)
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("class_count", &self.class_count)
            .finish()
    }
}

impl InferenceEngine {
    /// Parse the model with `backend` and prepare it to produce `class_count` scores.
    ///
    /// # Errors
    ///
    /// Any failure here is fatal for the caller: a missing or malformed model,
    /// a model without inputs or outputs, a zero class count, or a model whose
    /// output length is not `class_count` (`OutputMismatch`).
    pub fn load(
        backend: &dyn Backend,
        model: ModelSource,
        device: Device,
        class_count: usize,
    ) -> Result<Self, InferError> {
        if class_count == 0 {
            return Err(InferError::ModelLoad(
                "class count must be at least 1".to_string(),
            ));
        }

        let description = model.describe();
        let session = backend.load_model(model, device.clone())?;

        let input_name = session
            .input_names()
            .first()
            .ok_or_else(|| InferError::ModelLoad("model has no inputs".to_string()))?
            .clone();
        let output_name = session
            .output_names()
            .first()
            .ok_or_else(|| InferError::ModelLoad("model has no outputs".to_string()))?
            .clone();

        let mut engine = Self {
            session,
            backend: backend.name().to_string(),
            input_name,
            output_name,
            class_count,
        };

        // the output length is fixed by the model; a zero frame exposes it
        engine.infer(&InputTensor::zeros())?;

        log::info!(
            "loaded model {} with {} backend on {} ({} classes)",
            description,
            backend.name(),
            device,
            class_count
        );
        Ok(engine)
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// Run one forward pass. Each call returns a freshly allocated score vector.
    ///
    /// # Errors
    ///
    /// `OutputMismatch` when the model's output length differs from the
    /// configured class count; backend errors are passed through.
    pub fn infer(&mut self, tensor: &InputTensor) -> Result<ScoreVector, InferError> {
        let input = tensor.to_tensor()?;
        let mut outputs = self.session.run(&[(self.input_name.as_str(), input)])?;

        let output = outputs.remove(&self.output_name).ok_or_else(|| {
            InferError::BackendError(format!("model produced no '{}' output", self.output_name))
        })?;

        if output.len() != self.class_count {
            return Err(InferError::OutputMismatch {
                expected: self.class_count,
                got: output.len(),
            });
        }

        Ok(ScoreVector::new(output.into_data()))
    }
}

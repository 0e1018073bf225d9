use crate::{Device, InferError, ModelSource, Session};

/// A numeric runtime that can turn a serialized model into a runnable session.
pub trait Backend: Send + Sync {
    fn name(&self) -> &str;
    fn load_model(&self, model: ModelSource, device: Device)
    -> Result<Box<dyn Session>, InferError>;
}

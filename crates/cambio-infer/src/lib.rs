//! Model loading and single-frame inference for the cambio classifier.
//!
//! A [`Backend`] parses a serialized model into a [`Session`];
//! [`InferenceEngine`] wraps one session, feeds it an [`InputTensor`] and hands
//! back a [`ScoreVector`] of the configured length.

pub mod backend;
pub mod backendregistry;
pub mod backends;
pub mod device;
pub mod engine;
pub mod error;
pub mod modelsource;
pub mod session;
pub mod tensor;

pub use backend::Backend;
pub use backendregistry::{BackendRegistry, create_registry};
pub use device::Device;
pub use engine::InferenceEngine;
pub use error::InferError;
pub use modelsource::ModelSource;
pub use session::Session;
pub use tensor::{
    BATCH_SIZE, INPUT_CHANNELS, INPUT_ELEMENTS, INPUT_SHAPE, INPUT_SIZE, INPUT_TENSOR_BYTES,
    InputTensor, ScoreVector,
};

//! Still-frame currency classification.
//!
//! Decoded frame -> 224x224 normalized tensor -> model scores -> label.
//! [`Classifier`] runs those steps synchronously; [`ClassificationPipeline`]
//! puts a classifier behind a single worker and hands out futures.

pub mod classifier;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod labels;
pub mod pipeline;
pub mod preprocess;
pub mod resolve;

pub use classifier::Classifier;
pub use collaborators::{Announcer, LogAnnouncer, StillCamera, announce};
pub use config::{ClassifierConfig, DEFAULT_CLASS_COUNT, DEFAULT_UNKNOWN_LABEL};
pub use error::{CaptureError, LoadError, PipelineError, Stage};
pub use labels::LabelTable;
pub use pipeline::{ClassificationPipeline, ClassifyHandle};
pub use preprocess::preprocess;
pub use resolve::{ClassificationResult, argmax, resolve};

pub mod candle;
#[cfg(feature = "onnx")]
pub mod onnx;

pub use candle::{CandleBackend, serialize_linear_head};
#[cfg(feature = "onnx")]
pub use onnx::OnnxBackend;

//! Linear classification head executed with candle.
//!
//! The model asset is a safetensors file holding `classifier.weight`
//! (`[classes, 150528]`) and `classifier.bias` (`[classes]`). The flattened
//! NHWC input is multiplied by the weight and offset by the bias.

use crate::{Backend, Device, INPUT_ELEMENTS, InferError, ModelSource, Session};
use cambio_base::Tensor;
use candle_core::{DType, Device as CandleDevice, Tensor as CanTensor};
use candle_nn::{Linear, Module, VarBuilder};
use safetensors::{Dtype, SafeTensors, tensor::TensorView};
use std::collections::HashMap;

pub const HEAD_PREFIX: &str = "classifier";
pub const WEIGHT_KEY: &str = "classifier.weight";
pub const BIAS_KEY: &str = "classifier.bias";

pub const INPUT_NAME: &str = "input";
pub const OUTPUT_NAME: &str = "scores";

pub struct CandleBackend;

fn candle_device(device: &Device) -> Result<CandleDevice, InferError> {
    match device {
        Device::Cpu => Ok(CandleDevice::Cpu),
        #[cfg(feature = "cuda")]
        Device::Cuda { device_id } => Ok(CandleDevice::new_cuda(*device_id as usize)?),
        #[cfg(not(feature = "cuda"))]
        Device::Cuda { .. } => Err(InferError::UnsupportedDevice(device.clone())),
    }
}

impl Backend for CandleBackend {
    fn name(&self) -> &str {
        "candle"
    }

    fn load_model(
        &self,
        model: ModelSource,
        device: Device,
    ) -> Result<Box<dyn Session>, InferError> {
        let device = candle_device(&device)?;
        let description = model.describe();
        let bytes = model.into_bytes().map_err(|e| {
            InferError::ModelLoad(format!("failed to read model {description}: {e}"))
        })?;

        let class_count = detect_class_count(&bytes)?;
        let weights = VarBuilder::from_buffered_safetensors(bytes, DType::F32, &device)?;
        let head = candle_nn::linear(INPUT_ELEMENTS, class_count, weights.pp(HEAD_PREFIX))
            .map_err(|e| InferError::ModelLoad(format!("invalid classification head: {e}")))?;
        log::debug!("candle head: {class_count} classes from {description}");

        Ok(Box::new(CandleSession {
            head,
            device,
            input_names: vec![INPUT_NAME.to_string()],
            output_names: vec![OUTPUT_NAME.to_string()],
        }))
    }
}

/// Read the class count from the weight's shape without loading any data.
fn detect_class_count(bytes: &[u8]) -> Result<usize, InferError> {
    let tensors = SafeTensors::deserialize(bytes)
        .map_err(|e| InferError::ModelLoad(format!("failed to parse safetensors: {e}")))?;
    let weight = tensors
        .tensor(WEIGHT_KEY)
        .map_err(|e| InferError::ModelLoad(format!("tensor '{WEIGHT_KEY}' not found: {e}")))?;

    match weight.shape() {
        [classes, features] if *features == INPUT_ELEMENTS && *classes > 0 => Ok(*classes),
        shape => Err(InferError::ModelLoad(format!(
            "'{WEIGHT_KEY}' must be [classes, {INPUT_ELEMENTS}], got {shape:?}"
        ))),
    }
}

/// Encode a linear head in the layout [`CandleBackend`] loads.
///
/// `weight` must be `[classes, 150528]` and `bias` `[classes]`.
pub fn serialize_linear_head(weight: &Tensor<f32>, bias: &Tensor<f32>) -> Result<Vec<u8>, InferError> {
    let classes = match weight.shape.as_slice() {
        [classes, features] if *features == INPUT_ELEMENTS => *classes,
        _ => {
            return Err(InferError::Shape(format!(
                "weight must be [classes, {INPUT_ELEMENTS}], got {:?}",
                weight.shape
            )));
        }
    };
    if bias.shape != [classes] {
        return Err(InferError::Shape(format!(
            "bias must be [{classes}], got {:?}",
            bias.shape
        )));
    }

    // safetensors stores little-endian element bytes
    let weight_bytes: Vec<u8> = weight.data.iter().flat_map(|v| v.to_le_bytes()).collect();
    let bias_bytes: Vec<u8> = bias.data.iter().flat_map(|v| v.to_le_bytes()).collect();
    let views = [
        (WEIGHT_KEY, f32_view(weight.shape.clone(), &weight_bytes)?),
        (BIAS_KEY, f32_view(bias.shape.clone(), &bias_bytes)?),
    ];
    safetensors::serialize(views, &None)
        .map_err(|e| InferError::Shape(format!("failed to serialize head: {e}")))
}

fn f32_view(shape: Vec<usize>, bytes: &[u8]) -> Result<TensorView<'_>, InferError> {
    TensorView::new(Dtype::F32, shape, bytes)
        .map_err(|e| InferError::Shape(format!("invalid tensor view: {e}")))
}

pub struct CandleSession {
    head: Linear,
    device: CandleDevice,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Session for CandleSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        let [(name, input)] = inputs else {
            return Err(InferError::BackendError(format!(
                "expected exactly one input, got {}",
                inputs.len()
            )));
        };
        if *name != INPUT_NAME {
            return Err(InferError::InvalidInput {
                name: name.to_string(),
                expected_names: self.input_names.clone(),
            });
        }
        if input.len() != INPUT_ELEMENTS {
            return Err(InferError::Shape(format!(
                "expected {INPUT_ELEMENTS} input values, got {} (shape {:?})",
                input.len(),
                input.shape
            )));
        }

        let x = CanTensor::from_slice(&input.data, (1, INPUT_ELEMENTS), &self.device)?;
        let scores = self.head.forward(&x)?;
        let scores: Vec<f32> = scores.flatten_all()?.to_vec1()?;

        let classes = scores.len();
        let mut outputs = HashMap::new();
        outputs.insert(
            OUTPUT_NAME.to_string(),
            Tensor::new(vec![1, classes], scores)?,
        );
        Ok(outputs)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

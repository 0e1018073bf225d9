use crate::{Backend, Device, InferError, ModelSource, Session};
use cambio_base::Tensor;
use ndarray::ArrayD;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use std::collections::HashMap;

/// Runs serialized ONNX classifiers through ONNX Runtime.
///
/// The model must take a single f32 NHWC input `[1, 224, 224, 3]` and produce
/// one f32 score tensor.
pub struct OnnxBackend;

impl Backend for OnnxBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(
        &self,
        model: ModelSource,
        device: Device,
    ) -> Result<Box<dyn Session>, InferError> {
        let mut builder = OrtSession::builder().map_err(|e| {
            InferError::BackendError(format!("failed to create session builder: {e}"))
        })?;

        builder = match &device {
            Device::Cpu => {
                log::debug!("onnx: using CPU execution provider");
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::ep::ExecutionProvider;
                use ort::execution_providers::CUDAExecutionProvider;
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                let available = ep.is_available().unwrap_or(false);
                log::info!("onnx: CUDA EP requested (device_id={device_id}), available: {available}");
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::UnsupportedDevice(device.clone()));
            }
        };

        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(&path).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model {}: {e}", path.display()))
            })?,
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from memory: {e}"))
            })?,
        };

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();

        Ok(Box::new(OnnxSession {
            session,
            input_names,
            output_names,
        }))
    }
}

pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        let [(name, tensor)] = inputs else {
            return Err(InferError::BackendError(format!(
                "classifier models take exactly one input, got {}",
                inputs.len()
            )));
        };
        if !self.input_names.iter().any(|n| n == name) {
            return Err(InferError::InvalidInput {
                name: name.to_string(),
                expected_names: self.input_names.clone(),
            });
        }

        let array = tensor_to_ndarray(tensor.clone())?;
        let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
            InferError::BackendError(format!("failed to create tensor ref: {e}"))
        })?;
        let outputs = self
            .session
            .run(inputs![*name => tensor_ref])
            .map_err(|e| InferError::BackendError(format!("inference failed: {e}")))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let array = outputs[output_name.as_str()]
                .try_extract_array::<f32>()
                .map_err(|e| {
                    InferError::BackendError(format!("output '{output_name}' is not f32: {e}"))
                })?;
            result.insert(output_name.clone(), ndarray_to_tensor(array)?);
        }

        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

pub fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data)
        .map_err(|e| InferError::Shape(format!("failed to create ndarray from tensor: {e}")))
}

pub fn ndarray_to_tensor(
    array: ndarray::ArrayView<'_, f32, ndarray::IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Ok(Tensor::new(shape, data)?)
}

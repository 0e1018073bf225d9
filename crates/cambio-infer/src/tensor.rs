use crate::InferError;
use cambio_base::Tensor;

pub const BATCH_SIZE: usize = 1;
/// Model input is a square of this many pixels per side.
pub const INPUT_SIZE: usize = 224;
pub const INPUT_CHANNELS: usize = 3;
pub const INPUT_ELEMENTS: usize = BATCH_SIZE * INPUT_SIZE * INPUT_SIZE * INPUT_CHANNELS;
/// Byte length of an [`InputTensor`]: one native-endian f32 per element.
pub const INPUT_TENSOR_BYTES: usize = 4 * INPUT_ELEMENTS;

/// NHWC shape of the model input.
pub const INPUT_SHAPE: [usize; 4] = [BATCH_SIZE, INPUT_SIZE, INPUT_SIZE, INPUT_CHANNELS];

/// The normalized model input: `1 x 224 x 224 x 3` f32 values in R, G, B order,
/// row-major, stored as native-endian bytes.
///
/// The length is checked on construction, so a value of this type always has
/// exactly [`INPUT_TENSOR_BYTES`] bytes.
#[derive(Clone, PartialEq)]
pub struct InputTensor {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for InputTensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputTensor")
            .field("shape", &INPUT_SHAPE)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl InputTensor {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, InferError> {
        if bytes.len() != INPUT_TENSOR_BYTES {
            return Err(InferError::Shape(format!(
                "input tensor must be {INPUT_TENSOR_BYTES} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self { bytes })
    }

    /// An all-black input.
    pub fn zeros() -> Self {
        Self {
            bytes: vec![0; INPUT_TENSOR_BYTES],
        }
    }

    /// Build a tensor from the value at each flat NHWC element index.
    pub fn from_fn(mut value: impl FnMut(usize) -> f32) -> Self {
        let mut bytes = Vec::with_capacity(INPUT_TENSOR_BYTES);
        for index in 0..INPUT_ELEMENTS {
            bytes.extend_from_slice(&value(index).to_ne_bytes());
        }
        Self { bytes }
    }

    pub fn from_values(values: &[f32]) -> Result<Self, InferError> {
        if values.len() != INPUT_ELEMENTS {
            return Err(InferError::Shape(format!(
                "input tensor must hold {INPUT_ELEMENTS} values, got {}",
                values.len()
            )));
        }
        let bytes = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
    }

    /// Copy into an NHWC `Tensor<f32>` for a [`Session`](crate::Session).
    pub fn to_tensor(&self) -> Result<Tensor<f32>, InferError> {
        Ok(Tensor::new(INPUT_SHAPE.to_vec(), self.values().collect())?)
    }
}

/// One score per class, in model output order. Not necessarily normalized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreVector(Vec<f32>);

impl ScoreVector {
    pub fn new(scores: Vec<f32>) -> Self {
        Self(scores)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.0
    }
}

impl From<Vec<f32>> for ScoreVector {
    fn from(scores: Vec<f32>) -> Self {
        Self(scores)
    }
}

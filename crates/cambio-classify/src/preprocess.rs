use cambio_image::{FRAME_CHANNELS, Frame};
use cambio_infer::{INPUT_CHANNELS, INPUT_SIZE, InputTensor};

/// Turn a decoded frame into the model input.
///
/// The frame is stretched to 224x224 with bilinear filtering (no crop or
/// letterbox, so non-square frames are distorted), then each pixel's R, G and B
/// bytes are written as `value / 255.0` in row-major order. Alpha is dropped.
pub fn preprocess(frame: &Frame) -> InputTensor {
    let side = INPUT_SIZE as u32;
    let resized = frame.resize(side, side);
    let rgba = resized.as_bytes();

    InputTensor::from_fn(|index| {
        let pixel = index / INPUT_CHANNELS;
        let channel = index % INPUT_CHANNELS;
        rgba[pixel * FRAME_CHANNELS + channel] as f32 / 255.0
    })
}

//! Still-frame decoding for the cambio classifier.
//!
//! Wraps the `image` crate: whatever encoding the camera produced (JPEG, PNG,
//! ...) comes out as a [`Frame`] in packed 8-bit RGBA, so preprocessing always
//! sees the same layout.

pub mod error;
pub mod frame;

pub use error::ImageError;
pub use frame::{FRAME_CHANNELS, Frame};

/// Decodes an encoded still image into an RGBA [`Frame`].
///
/// The format is auto-detected. Grayscale, 16-bit and float sources are all
/// converted to 8-bit RGBA; sources without alpha get an opaque alpha channel.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the bytes are not a supported image, and
/// `ImageError::Empty` if the image has a zero dimension.
pub fn decode_frame(data: &[u8]) -> Result<Frame, ImageError> {
    if data.is_empty() {
        return Err(ImageError::Decode("no image data".to_string()));
    }
    let image = crates_image::load_from_memory(data)?;
    log::debug!(
        "decoded {}x{} {:?} frame ({} bytes)",
        image.width(),
        image.height(),
        image.color(),
        data.len()
    );
    Frame::from_image(image.into_rgba8())
}

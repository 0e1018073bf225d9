use crate::ImageError;
use cambio_base::TensorError;
use crates_image::{RgbaImage, imageops::FilterType};

/// Channels per pixel in a captured frame: R, G, B, A.
pub const FRAME_CHANNELS: usize = 4;

/// A decoded still frame in packed 8-bit RGBA, row-major.
///
/// Alpha is carried but never read by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    pub(crate) fn from_image(image: RgbaImage) -> Result<Self, ImageError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::Empty { width, height });
        }
        Ok(Self { image })
    }

    /// Wrap raw RGBA bytes, exactly `width * height * 4` of them.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * FRAME_CHANNELS;
        let got = data.len();
        // from_raw accepts trailing bytes; a frame must not carry them
        if got != expected {
            return Err(TensorError::ShapeMismatch { expected, got }.into());
        }
        let image = RgbaImage::from_raw(width, height, data)
            .ok_or(TensorError::ShapeMismatch { expected, got })?;
        Self::from_image(image)
    }

    /// A frame where every pixel has the same color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, ImageError> {
        Self::from_image(RgbaImage::from_pixel(
            width,
            height,
            crates_image::Rgba(rgba),
        ))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Packed RGBA bytes, row-major, no padding.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Resample to exactly `width` x `height` with bilinear filtering.
    ///
    /// Aspect ratio is not preserved; non-square frames are stretched.
    /// Zero target dimensions are clamped to one pixel.
    pub fn resize(&self, width: u32, height: u32) -> Frame {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == self.image.dimensions() {
            return self.clone();
        }
        let image = crates_image::imageops::resize(&self.image, width, height, FilterType::Triangle);
        Frame { image }
    }
}

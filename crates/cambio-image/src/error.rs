use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Empty { width: u32, height: u32 },
    Tensor(cambio_base::TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Empty { width, height } => {
                write!(f, "image has no pixels ({width}x{height})")
            }
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<cambio_base::TensorError> for ImageError {
    fn from(err: cambio_base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}

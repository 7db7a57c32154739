use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("decay factor must lie strictly between 0 and 1, got {0}")]
    InvalidDecay(f64),

    #[error("texture side length must be at least 1 pixel")]
    EmptyImage,

    #[error("texture side length {0} does not fit a PNG dimension")]
    TooLarge(usize),

    #[error("failed to encode texture: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, TextureError>;

//! Icon pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, composing, or writing icon images
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Source file not found: `{0}`")]
    SourceNotFound(PathBuf),

    #[error("Failed to decode image `{0}`")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("Failed to encode PNG `{0}`")]
    Encode(PathBuf, #[source] image::ImageError),

    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("inset_px must be in [0, {max}], got {inset}")]
    InvalidInset { inset: i64, max: u32 },

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Mask is {mask_width}x{mask_height} but image is {width}x{height}")]
    MaskSize {
        mask_width: u32,
        mask_height: u32,
        width: u32,
        height: u32,
    },
}

pub type IconResult<T> = Result<T, IconError>;

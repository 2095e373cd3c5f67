use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image asset not found: {}", path.display())]
    AssetMissing { path: PathBuf },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RecropError>;

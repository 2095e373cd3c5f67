use std::path::Path;

use image::RgbaImage;

use crate::error::{RecropError, Result};

/// Load the source bitmap, failing fast with a clear diagnostic when the
/// asset is absent instead of surfacing the failure deep in gesture handling.
pub fn load(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(RecropError::AssetMissing {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path)?.to_rgba8();
    if image.width() == 0 || image.height() == 0 {
        return Err(RecropError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "loaded source image"
    );
    Ok(image)
}

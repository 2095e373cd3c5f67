use image::{imageops, RgbaImage};

use crate::error::{RecropError, Result};
use crate::geometry::{DisplayGeometry, Offset, ScreenGeometry, Size};

/// An axis-aligned rectangle in unscaled displayed-image coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A rectangle in native image pixel coordinates for cropping.
#[derive(Clone, Debug, PartialEq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Validate the crop rect against the source dimensions.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<CropRect> {
        if self.width == 0 || self.height == 0 {
            return Err(RecropError::InvalidCrop(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.x + self.width > src_w || self.y + self.height > src_h {
            return Err(RecropError::InvalidCrop(format!(
                "Crop region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(self.clone())
    }
}

/// Undo the pan/zoom transform: the region of the unscaled displayed image
/// that is visible inside the fixed crop window.
pub fn crop_window_in_display(
    displayed: Size,
    crop_window: Size,
    offset: Offset,
    scale: f32,
) -> DisplayRect {
    let width = crop_window.width / scale;
    let height = crop_window.height / scale;
    DisplayRect {
        x: (displayed.width - width) / 2.0 - offset.x / scale,
        y: (displayed.height - height) / 2.0 - offset.y / scale,
        width,
        height,
    }
}

/// Ratio between the image's native resolution and the screen's logical
/// resolution. The image may be rendered at well below its native size.
pub fn view_scale(geometry: &DisplayGeometry, screen: ScreenGeometry) -> f32 {
    (geometry.native_width as f32 / screen.width)
        .max(geometry.native_height as f32 / screen.height)
}

/// Convert the committed viewport state into a pixel-exact crop of the
/// native-resolution image.
///
/// Fails with `InvalidCrop` when the rectangle falls outside the bitmap:
/// callers must treat absence distinctly from success.
pub fn render_crop(
    image: &RgbaImage,
    geometry: &DisplayGeometry,
    screen: ScreenGeometry,
    crop_window: Size,
    offset: Offset,
    scale: f32,
) -> Result<RgbaImage> {
    let display_rect = crop_window_in_display(geometry.displayed, crop_window, offset, scale);
    let ratio = view_scale(geometry, screen);

    let x = display_rect.x * ratio;
    let y = display_rect.y * ratio;

    if x < -0.5 || y < -0.5 {
        return Err(RecropError::InvalidCrop(format!(
            "Crop origin ({x:.1},{y:.1}) lies outside the image"
        )));
    }

    let rect = CropRect {
        x: x.round().max(0.0) as u32,
        y: y.round().max(0.0) as u32,
        width: (display_rect.width * ratio).round() as u32,
        height: (display_rect.height * ratio).round() as u32,
    }
    .validated(image.width(), image.height())?;

    tracing::debug!(
        x = rect.x,
        y = rect.y,
        width = rect.width,
        height = rect.height,
        "extracting crop"
    );

    Ok(imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image())
}

use serde::{Deserialize, Serialize};

use crate::error::{RecropError, Result};

/// A width/height pair in logical display units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A pan translation or committed pan position, in logical display units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Logical screen dimensions, supplied once at initialization rather than
/// queried from ambient device state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenGeometry {
    pub width: f32,
    pub height: f32,
}

/// The size at which the source image is rendered on screen.
///
/// Fixed once at startup: the native size scaled by a device-width factor so
/// the image fits the screen width exactly.
#[derive(Clone, Copy, Debug)]
pub struct DisplayGeometry {
    /// Native pixel dimensions of the source image.
    pub native_width: u32,
    pub native_height: u32,
    /// On-screen rendering size, in logical display units.
    pub displayed: Size,
}

impl DisplayGeometry {
    /// Derive the display geometry for an image scaled to fit the screen width.
    pub fn fit_width(native_width: u32, native_height: u32, screen: ScreenGeometry) -> Result<Self> {
        if native_width == 0 || native_height == 0 {
            return Err(RecropError::InvalidDimensions {
                width: native_width,
                height: native_height,
            });
        }
        let factor = screen.width / native_width as f32;
        Ok(Self {
            native_width,
            native_height,
            displayed: Size::new(
                native_width as f32 * factor,
                native_height as f32 * factor,
            ),
        })
    }
}

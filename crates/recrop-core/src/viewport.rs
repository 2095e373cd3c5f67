use crate::geometry::{Offset, Size};

/// Fixed inputs of the pan/zoom controller, supplied once at construction.
///
/// `max_scale` must be at least `crop_window.width / displayed.width`, the
/// minimum scale at which the crop window still fits inside the image.
#[derive(Clone, Copy, Debug)]
pub struct ViewportConfig {
    /// On-screen rendering size of the image at scale 1.
    pub displayed: Size,
    /// Fixed crop window size, in logical display units.
    pub crop_window: Size,
    /// Upper zoom bound.
    pub max_scale: f32,
}

impl ViewportConfig {
    /// Smallest scale that keeps the crop window within the image width.
    pub fn min_scale(&self) -> f32 {
        self.crop_window.width / self.displayed.width
    }
}

/// Pan/zoom state of the displayed image.
///
/// Held as one consistent snapshot: the live offset and scale reflect the
/// gesture in progress, the committed (`last_*`) values the state at the end
/// of the previous gesture. All mutation goes through the four gesture
/// operations, so the pan clamp always sees the latest scale.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewportConfig,
    offset: Offset,
    scale: f32,
    last_offset: Offset,
    last_scale: f32,
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config,
            offset: Offset::ZERO,
            scale: 1.0,
            last_offset: Offset::ZERO,
            last_scale: 1.0,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Maximum pan distance per axis that keeps the crop window fully inside
    /// the scaled image, at the current scale. Floored at zero: when the crop
    /// window aspect differs from the image's, the short axis pins to center.
    pub fn offset_limit(&self) -> Offset {
        Offset::new(
            ((self.config.displayed.width * self.scale - self.config.crop_window.width) / 2.0)
                .max(0.0),
            ((self.config.displayed.height * self.scale - self.config.crop_window.height) / 2.0)
                .max(0.0),
        )
    }

    /// Apply a drag translation measured from the start of the gesture.
    ///
    /// The candidate offset is the committed offset plus the translation,
    /// clamped per axis against the limit at the current scale. Recomputed
    /// every call: zooming out pulls an over-panned view back in bounds on
    /// the next pan event.
    pub fn pan_changed(&mut self, translation: Offset) {
        let limit = self.offset_limit();
        self.offset = Offset::new(
            (self.last_offset.x + translation.x).clamp(-limit.x, limit.x),
            (self.last_offset.y + translation.y).clamp(-limit.y, limit.y),
        );
    }

    /// Commit the live offset. Idempotent between gestures.
    pub fn pan_ended(&mut self) {
        self.last_offset = self.offset;
    }

    /// Apply a pinch magnification measured from the start of the gesture.
    ///
    /// The raw gesture value is dampened to half sensitivity before scaling
    /// the committed value, then clamped to `[min_scale, max_scale]`.
    pub fn zoom_changed(&mut self, magnification: f32) {
        let damped = (magnification - 1.0) * 0.5 + 1.0;
        self.scale = (damped * self.last_scale).clamp(self.config.min_scale(), self.config.max_scale);
    }

    /// Commit the live scale, and the live offset with it: the end of a zoom
    /// freezes any concurrent pan. The offset is not re-clamped against the
    /// newly committed scale; only the next pan event re-clamps.
    pub fn zoom_ended(&mut self) {
        self.last_scale = self.scale;
        self.last_offset = self.offset;
    }

    /// Whether the resting offset satisfies the containment invariant at the
    /// current scale. Can be false right after a zoom-out ends, until the
    /// next pan event re-clamps.
    pub fn is_settled(&self) -> bool {
        let limit = self.offset_limit();
        self.offset.x.abs() <= limit.x && self.offset.y.abs() <= limit.y
    }
}

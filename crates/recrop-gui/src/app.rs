use image::RgbaImage;

use recrop_core::crop;
use recrop_core::geometry::{DisplayGeometry, Offset};
use recrop_core::viewport::{Viewport, ViewportConfig};

use crate::config::AppConfig;
use crate::convert::rgba_to_color_image;
use crate::panels;

/// Outcome of the confirm action, shown in the preview window.
pub enum CropPreview {
    Ready(egui::TextureHandle),
    Failed,
}

pub struct RecropApp {
    pub config: AppConfig,
    pub geometry: DisplayGeometry,
    pub image: RgbaImage,
    pub texture: Option<egui::TextureHandle>,
    pub viewport: Viewport,
    /// Gesture-total drag translation, while a pan is in progress.
    pub pan_translation: Option<Offset>,
    /// Gesture-total magnification, while a pinch is in progress.
    pub magnification: Option<f32>,
    pub preview: Option<CropPreview>,
}

impl RecropApp {
    pub fn new(config: AppConfig, geometry: DisplayGeometry, image: RgbaImage) -> Self {
        let viewport = Viewport::new(ViewportConfig {
            displayed: geometry.displayed,
            crop_window: config.crop_window,
            max_scale: config.max_scale,
        });

        Self {
            config,
            geometry,
            image,
            texture: None,
            viewport,
            pan_translation: None,
            magnification: None,
            preview: None,
        }
    }

    /// Texture for the source image, uploaded on first use.
    pub fn source_texture(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        self.texture
            .get_or_insert_with(|| {
                ctx.load_texture(
                    "source",
                    rgba_to_color_image(&self.image),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }

    /// Run the cropper against the current viewport state and open the
    /// preview. Extraction failure surfaces as a placeholder, not an abort.
    pub fn confirm_crop(&mut self, ctx: &egui::Context) {
        let result = crop::render_crop(
            &self.image,
            &self.geometry,
            self.config.screen,
            self.config.crop_window,
            self.viewport.offset(),
            self.viewport.scale(),
        );

        self.preview = Some(match result {
            Ok(cropped) => {
                tracing::info!(width = cropped.width(), height = cropped.height(), "cropped");
                CropPreview::Ready(ctx.load_texture(
                    "crop-result",
                    rgba_to_color_image(&cropped),
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(err) => {
                tracing::warn!("crop failed: {err}");
                CropPreview::Failed
            }
        });
    }
}

impl eframe::App for RecropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar::show(ctx, self);
        panels::editor::show(ctx, self);
        panels::preview::show(ctx, self);
    }
}

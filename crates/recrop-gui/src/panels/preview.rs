use crate::app::{CropPreview, RecropApp};

/// The "sheet": a window showing the crop result, or a placeholder when
/// extraction failed.
pub fn show(ctx: &egui::Context, app: &mut RecropApp) {
    let Some(preview) = &app.preview else { return };

    let mut open = true;
    egui::Window::new("Cropped")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| match preview {
            CropPreview::Ready(texture) => {
                ui.image((texture.id(), texture.size_vec2()));
            }
            CropPreview::Failed => {
                ui.label(
                    egui::RichText::new("No cropped image")
                        .size(18.0)
                        .color(egui::Color32::from_gray(100)),
                );
            }
        });

    if !open {
        app.preview = None;
    }
}

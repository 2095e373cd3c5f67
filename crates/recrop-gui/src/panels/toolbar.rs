use crate::app::RecropApp;

pub fn show(ctx: &egui::Context, app: &mut RecropApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{}x{}",
                app.geometry.native_width, app.geometry.native_height
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{2714} Crop").clicked() {
                    app.confirm_crop(ctx);
                }
                ui.label(format!("zoom {:.2}x", app.viewport.scale()));
            });
        });
    });
}

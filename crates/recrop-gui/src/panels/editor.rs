use recrop_core::geometry::Offset;

use crate::app::RecropApp;

pub fn show(ctx: &egui::Context, app: &mut RecropApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture = app.source_texture(ctx);
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        handle_pan(&response, app);
        handle_zoom(ui, &response, app);

        let img_rect = image_rect(rect, app);
        let crop_rect = crop_window_rect(rect, app);

        // Dimmed backdrop, then the bright image clipped to the crop window
        draw_image(ui.painter(), texture.id(), img_rect, egui::Color32::from_gray(90));
        let clipped = ui.painter().with_clip_rect(crop_rect);
        draw_image(&clipped, texture.id(), img_rect, egui::Color32::WHITE);

        draw_crop_border(ui, crop_rect);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// On-screen rect of the image at the current pan/zoom.
fn image_rect(rect: egui::Rect, app: &RecropApp) -> egui::Rect {
    let displayed = app.geometry.displayed;
    let scaled = egui::vec2(displayed.width, displayed.height) * app.viewport.scale();
    let offset = app.viewport.offset();
    let center = rect.center() + egui::vec2(offset.x, offset.y);
    egui::Rect::from_center_size(center, scaled)
}

/// The fixed crop window, centered in the panel regardless of pan/zoom.
fn crop_window_rect(rect: egui::Rect, app: &RecropApp) -> egui::Rect {
    let crop = app.config.crop_window;
    egui::Rect::from_center_size(rect.center(), egui::vec2(crop.width, crop.height))
}

fn handle_pan(response: &egui::Response, app: &mut RecropApp) {
    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        let total = app.pan_translation.get_or_insert(Offset::ZERO);
        total.x += delta.x;
        total.y += delta.y;
        let translation = *total;
        app.viewport.pan_changed(translation);
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        app.pan_translation = None;
        app.viewport.pan_ended();
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut RecropApp) {
    // Pinch and ctrl+scroll both arrive as per-frame zoom deltas; the
    // viewport wants the gesture-total magnification, so accumulate until
    // the deltas stop.
    let delta = ui.input(|i| i.zoom_delta());
    if delta != 1.0 && (response.hovered() || app.magnification.is_some()) {
        let total = app.magnification.map_or(delta, |m| m * delta);
        app.magnification = Some(total);
        app.viewport.zoom_changed(total);
    } else if app.magnification.take().is_some() {
        app.viewport.zoom_ended();
    }
}

fn draw_image(
    painter: &egui::Painter,
    texture_id: egui::TextureId,
    rect: egui::Rect,
    tint: egui::Color32,
) {
    painter.image(
        texture_id,
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        tint,
    );
}

fn draw_crop_border(ui: &egui::Ui, crop_rect: egui::Rect) {
    ui.painter().rect_stroke(
        crop_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::WHITE),
        egui::epaint::StrokeKind::Outside,
    );
}

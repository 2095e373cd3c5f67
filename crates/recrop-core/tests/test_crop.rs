use approx::assert_relative_eq;
use image::{Rgba, RgbaImage};

use recrop_core::crop::{crop_window_in_display, render_crop, view_scale, CropRect};
use recrop_core::geometry::{DisplayGeometry, Offset, ScreenGeometry, Size};

/// Image where each pixel encodes its own native coordinates.
fn positional_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
    })
}

#[test]
fn test_fit_width_geometry() {
    // native 800x600 on a 390-wide screen: factor 0.4875
    let screen = ScreenGeometry {
        width: 390.0,
        height: 844.0,
    };
    let geometry = DisplayGeometry::fit_width(800, 600, screen).unwrap();
    assert_relative_eq!(geometry.displayed.width, 390.0);
    assert_relative_eq!(geometry.displayed.height, 292.5);
}

#[test]
fn test_fit_width_rejects_degenerate_image() {
    let screen = ScreenGeometry {
        width: 390.0,
        height: 844.0,
    };
    assert!(DisplayGeometry::fit_width(0, 600, screen).is_err());
    assert!(DisplayGeometry::fit_width(800, 0, screen).is_err());
}

#[test]
fn test_centered_crop_window_in_display_space() {
    let displayed = Size::new(390.0, 292.5);
    let crop_window = Size::new(300.0, 225.0);

    let rect = crop_window_in_display(displayed, crop_window, Offset::ZERO, 1.0);
    assert_relative_eq!(rect.x, 45.0);
    assert_relative_eq!(rect.y, 33.75);
    assert_relative_eq!(rect.width, 300.0);
    assert_relative_eq!(rect.height, 225.0);
}

#[test]
fn test_zoom_shrinks_the_display_rect() {
    let displayed = Size::new(390.0, 292.5);
    let crop_window = Size::new(300.0, 225.0);

    let rect = crop_window_in_display(displayed, crop_window, Offset::new(50.0, 0.0), 2.0);
    // (390 - 150)/2 - 50/2 = 95
    assert_relative_eq!(rect.x, 95.0);
    assert_relative_eq!(rect.y, 90.0);
    assert_relative_eq!(rect.width, 150.0);
    assert_relative_eq!(rect.height, 112.5);
}

#[test]
fn test_view_scale_picks_dominant_axis() {
    let screen = ScreenGeometry {
        width: 390.0,
        height: 844.0,
    };
    let geometry = DisplayGeometry::fit_width(800, 600, screen).unwrap();
    assert_relative_eq!(view_scale(&geometry, screen), 800.0 / 390.0);

    // A tall image is bounded by the height axis instead
    let tall = DisplayGeometry::fit_width(400, 4000, screen).unwrap();
    assert_relative_eq!(view_scale(&tall, screen), 4000.0 / 844.0);
}

#[test]
fn test_render_crop_is_centered_at_rest() {
    // native 80x60 fit to a 40-wide screen: displayed 40x30, view scale 2
    let screen = ScreenGeometry {
        width: 40.0,
        height: 60.0,
    };
    let geometry = DisplayGeometry::fit_width(80, 60, screen).unwrap();
    let image = positional_image(80, 60);
    let crop_window = Size::new(20.0, 15.0);

    let result = render_crop(&image, &geometry, screen, crop_window, Offset::ZERO, 1.0).unwrap();
    assert_eq!(result.width(), 40);
    assert_eq!(result.height(), 30);

    // Display rect (10, 7.5) maps to native (20, 15): the 40x30 result sits
    // exactly centered in the 80x60 source
    assert_eq!(result.get_pixel(0, 0), &Rgba([20, 15, 0, 255]));
    assert_eq!(result.get_pixel(39, 29), &Rgba([59, 44, 0, 255]));
}

#[test]
fn test_render_crop_follows_pan() {
    let screen = ScreenGeometry {
        width: 40.0,
        height: 60.0,
    };
    let geometry = DisplayGeometry::fit_width(80, 60, screen).unwrap();
    let image = positional_image(80, 60);
    let crop_window = Size::new(20.0, 15.0);

    // Panning the image right by 4 display units shifts the window left
    let result = render_crop(
        &image,
        &geometry,
        screen,
        crop_window,
        Offset::new(4.0, 0.0),
        1.0,
    )
    .unwrap();
    assert_eq!(result.get_pixel(0, 0), &Rgba([12, 15, 0, 255]));
}

#[test]
fn test_render_crop_follows_zoom() {
    let screen = ScreenGeometry {
        width: 40.0,
        height: 60.0,
    };
    let geometry = DisplayGeometry::fit_width(80, 60, screen).unwrap();
    let image = positional_image(80, 60);
    let crop_window = Size::new(20.0, 15.0);

    // At scale 2 the window covers half the display-space area
    let result = render_crop(&image, &geometry, screen, crop_window, Offset::ZERO, 2.0).unwrap();
    assert_eq!(result.width(), 20);
    assert_eq!(result.height(), 15);
    // Display rect ((40-10)/2, (30-7.5)/2) = (15, 11.25) -> native (30, 22.5 -> 23)
    assert_eq!(result.get_pixel(0, 0), &Rgba([30, 23, 0, 255]));
}

#[test]
fn test_render_crop_out_of_bounds_is_absent() {
    let screen = ScreenGeometry {
        width: 40.0,
        height: 60.0,
    };
    let geometry = DisplayGeometry::fit_width(80, 60, screen).unwrap();
    let image = positional_image(80, 60);
    let crop_window = Size::new(20.0, 15.0);

    // Far beyond any pan limit on either side: absent result, not a panic
    let left = render_crop(
        &image,
        &geometry,
        screen,
        crop_window,
        Offset::new(500.0, 0.0),
        1.0,
    );
    assert!(left.is_err());

    let right = render_crop(
        &image,
        &geometry,
        screen,
        crop_window,
        Offset::new(-500.0, 0.0),
        1.0,
    );
    assert!(right.is_err());
}

#[test]
fn test_crop_rect_validation() {
    assert!(CropRect { x: 0, y: 0, width: 2, height: 2 }.validated(4, 4).is_ok());

    // Partially out of bounds
    assert!(CropRect { x: 3, y: 3, width: 2, height: 2 }.validated(4, 4).is_err());

    // Entirely out of bounds
    assert!(CropRect { x: 5, y: 0, width: 2, height: 2 }.validated(4, 4).is_err());

    // Degenerate
    assert!(CropRect { x: 0, y: 0, width: 0, height: 2 }.validated(4, 4).is_err());
}

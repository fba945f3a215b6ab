use image::{DynamicImage, ImageBuffer, RgbImage, RgbaImage, Rgba};

use crate::color::Color;
use crate::raster::{self, BBox};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Square,
    Round,
}

impl IconVariant {
    /// Write order within a density directory.
    pub const ALL: [IconVariant; 2] = [IconVariant::Square, IconVariant::Round];

    pub fn file_name(self) -> &'static str {
        match self {
            IconVariant::Square => "ic_launcher.png",
            IconVariant::Round => "ic_launcher_round.png",
        }
    }
}

/// Render either variant. Square icons come back as RGB8, round ones as RGBA8.
pub fn render_variant(variant: IconVariant, size: u32, background: Color, accent: Color) -> DynamicImage {
    match variant {
        IconVariant::Square => DynamicImage::ImageRgb8(render_square(size, background, accent)),
        IconVariant::Round => DynamicImage::ImageRgba8(render_round(size, background, accent)),
    }
}

// Hexagonal shield, clockwise from the top point.
fn shield_points(size: i32, padding: i32) -> [(i32, i32); 6] {
    let height = size - 2 * padding;
    [
        (size / 2, padding),
        (padding, padding + height / 3),
        (padding, padding + 2 * height / 3),
        (size / 2, size - padding),
        (size - padding, padding + 2 * height / 3),
        (size - padding, padding + height / 3),
    ]
}

/// Top-left corner and edge length of the square the lock is laid out in.
fn lock_frame(size: i32) -> (i32, i32, i32) {
    let lock = size / 4;
    (size / 2 - lock / 2, size / 2 - lock / 4, lock)
}

/// Lock body rectangle. Its top edge sits a little below the canvas center.
pub(crate) fn lock_body(size: u32) -> BBox {
    let (x, y, lock) = lock_frame(size as i32);
    [x, y + lock / 3, x + lock, y + lock]
}

pub fn render_square(size: u32, background: Color, accent: Color) -> RgbImage {
    let s = size as i32;
    let mut img = ImageBuffer::from_pixel(size, size, background.to_rgb());

    raster::fill_polygon(&mut img, &shield_points(s, s / 6), accent.to_rgb());
    raster::fill_rect(&mut img, lock_body(size), background.to_rgb());

    let (x, y, lock) = lock_frame(s);
    let inset = lock / 4;
    let shackle = [x + inset, y, x + lock - inset, y + lock / 2];
    raster::stroke_arc(&mut img, shackle, 0.0, 180.0, size / 24, background.to_rgb());

    img
}

pub fn render_round(size: u32, background: Color, accent: Color) -> RgbaImage {
    let s = size as i32;
    let mut img = ImageBuffer::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    raster::fill_ellipse(&mut img, [0, 0, s - 1, s - 1], background.to_rgba());
    raster::fill_polygon(&mut img, &shield_points(s, s / 5), accent.to_rgba());
    raster::fill_rect(&mut img, lock_body(size), background.to_rgba());

    let (x, y, lock) = lock_frame(s);
    let shackle = [x + lock / 4, y, x + 3 * lock / 4, y + lock / 2];
    // 2px floor keeps the shackle visible on mdpi
    let width = (size / 24).max(2);
    raster::stroke_arc(&mut img, shackle, 0.0, 180.0, width, background.to_rgba());

    img
}

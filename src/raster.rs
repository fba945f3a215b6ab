//! Minimal fill/stroke primitives on top of `image` buffers.
//!
//! Pixel `(x, y)` covers the unit square starting at `(x, y)`. Polygons and
//! rectangles test the integer corner, curved shapes test the pixel center.
//! Bounding boxes are inclusive on both ends. Everything is clipped to the
//! canvas, so no input size makes a primitive panic.

use image::GenericImage;

/// Inclusive pixel box `[x0, y0, x1, y1]`.
pub type BBox = [i32; 4];

#[inline]
fn put<I: GenericImage>(img: &mut I, x: i32, y: i32, color: I::Pixel) {
    let (w, h) = img.dimensions();
    if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Visible pixel range of `[lo, hi]` on an axis of length `len`.
fn clip(lo: i32, hi: i32, len: u32) -> std::ops::RangeInclusive<i32> {
    let max = len.min(i32::MAX as u32) as i32 - 1;
    lo.max(0)..=hi.min(max)
}

pub fn fill_rect<I: GenericImage>(img: &mut I, bbox: BBox, color: I::Pixel) {
    let [x0, y0, x1, y1] = bbox;
    let (w, h) = img.dimensions();
    for y in clip(y0, y1, h) {
        for x in clip(x0, x1, w) {
            put(img, x, y, color);
        }
    }
}

#[inline]
fn cross(ax: i64, ay: i64, bx: i64, by: i64) -> i64 {
    ax * by - ay * bx
}

fn on_segment(px: i64, py: i64, a: (i32, i32), b: (i32, i32)) -> bool {
    let (ax, ay) = (a.0 as i64, a.1 as i64);
    let (bx, by) = (b.0 as i64, b.1 as i64);
    cross(bx - ax, by - ay, px - ax, py - ay) == 0
        && px >= ax.min(bx)
        && px <= ax.max(bx)
        && py >= ay.min(by)
        && py <= ay.max(by)
}

/// Even-odd test, with points on an edge counted as inside.
fn point_in_polygon(px: i64, py: i64, points: &[(i32, i32)]) -> bool {
    let n = points.len();
    let mut inside = false;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if on_segment(px, py, a, b) {
            return true;
        }
        let (ax, ay) = (a.0 as f64, a.1 as f64);
        let (bx, by) = (b.0 as f64, b.1 as f64);
        let (fx, fy) = (px as f64, py as f64);
        if (ay > fy) != (by > fy) && fx < (bx - ax) * (fy - ay) / (by - ay) + ax {
            inside = !inside;
        }
    }
    inside
}

pub fn fill_polygon<I: GenericImage>(img: &mut I, points: &[(i32, i32)], color: I::Pixel) {
    if points.is_empty() {
        return;
    }
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
    let (w, h) = img.dimensions();
    for y in clip(min_y, max_y, h) {
        for x in clip(min_x, max_x, w) {
            if point_in_polygon(x as i64, y as i64, points) {
                put(img, x, y, color);
            }
        }
    }
}

/// Center and radii of the ellipse inscribed in the pixels covered by `bbox`.
fn ellipse_frame(bbox: BBox) -> (f64, f64, f64, f64) {
    let [x0, y0, x1, y1] = bbox;
    let cx = (x0 as f64 + x1 as f64 + 1.0) * 0.5;
    let cy = (y0 as f64 + y1 as f64 + 1.0) * 0.5;
    let rx = (x1 as f64 - x0 as f64 + 1.0) * 0.5;
    let ry = (y1 as f64 - y0 as f64 + 1.0) * 0.5;
    (cx, cy, rx, ry)
}

#[inline]
fn ellipse_norm(dx: f64, dy: f64, rx: f64, ry: f64) -> f64 {
    (dx / rx) * (dx / rx) + (dy / ry) * (dy / ry)
}

pub fn fill_ellipse<I: GenericImage>(img: &mut I, bbox: BBox, color: I::Pixel) {
    let (cx, cy, rx, ry) = ellipse_frame(bbox);
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let [x0, y0, x1, y1] = bbox;
    let (w, h) = img.dimensions();
    for y in clip(y0, y1, h) {
        for x in clip(x0, x1, w) {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if ellipse_norm(dx, dy, rx, ry) <= 1.0 {
                put(img, x, y, color);
            }
        }
    }
}

/// Stroke the inscribed ellipse of `bbox` between `start_deg` and `end_deg`.
///
/// Angles run counterclockwise from 3 o'clock as seen on screen, so `0..180`
/// is the upper half. The stroke grows inward from the box outline by
/// `width` pixels.
pub fn stroke_arc<I: GenericImage>(
    img: &mut I,
    bbox: BBox,
    start_deg: f64,
    end_deg: f64,
    width: u32,
    color: I::Pixel,
) {
    let (cx, cy, rx, ry) = ellipse_frame(bbox);
    if width == 0 || rx <= 0.0 || ry <= 0.0 || end_deg < start_deg {
        return;
    }
    let (irx, iry) = (rx - width as f64, ry - width as f64);
    let sweep = end_deg - start_deg;
    let [x0, y0, x1, y1] = bbox;
    let (w, h) = img.dimensions();
    for y in clip(y0, y1, h) {
        for x in clip(x0, x1, w) {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if ellipse_norm(dx, dy, rx, ry) > 1.0 {
                continue;
            }
            if irx > 0.0 && iry > 0.0 && ellipse_norm(dx, dy, irx, iry) < 1.0 {
                continue;
            }
            if sweep < 360.0 {
                let angle = (-dy / ry).atan2(dx / rx).to_degrees();
                if (angle - start_deg).rem_euclid(360.0) > sweep {
                    continue;
                }
            }
            put(img, x, y, color);
        }
    }
}

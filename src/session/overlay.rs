use image::{Rgb, RgbImage};

use crate::regions::{FeatureKind, Handle, Region, RegionSet};

const HANDLE_RADIUS: i32 = 5;
const HANDLE_FILL: [u8; 3] = [0, 255, 255];
const HANDLE_RING: [u8; 3] = [0, 0, 0];

fn put(image: &mut RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && x < image.width() as i64 && y < image.height() as i64 {
        image.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

/// Draw the rectangle border, `thickness` pixels wide, growing inwards.
/// Only the part of the border inside the image is visited.
fn draw_outline(image: &mut RgbImage, region: &Region, thickness: i64) {
    let color = region.kind().color();
    let (max_x, max_y) = (image.width() as i64 - 1, image.height() as i64 - 1);
    for t in 0..thickness {
        let (left, top) = (region.x as i64 + t, region.y as i64 + t);
        let (right, bottom) = (region.right() as i64 - t, region.bottom() as i64 - t);
        for x in left.max(0)..=right.min(max_x) {
            put(image, x, top, color);
            put(image, x, bottom, color);
        }
        for y in top.max(0)..=bottom.min(max_y) {
            put(image, left, y, color);
            put(image, right, y, color);
        }
    }
}

fn draw_handle(image: &mut RgbImage, cx: i64, cy: i64) {
    let radius = HANDLE_RADIUS as i64;
    let outer = radius * radius;
    let inner = (radius - 1) * (radius - 1);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d = dx * dx + dy * dy;
            if d <= inner {
                put(image, cx + dx, cy + dy, HANDLE_FILL);
            } else if d <= outer {
                put(image, cx + dx, cy + dy, HANDLE_RING);
            }
        }
    }
}

/// Draw every region's outline onto `image`. The selected region gets a
/// thicker border and its eight handles.
pub fn draw_regions(image: &mut RgbImage, regions: &RegionSet, selected: Option<FeatureKind>) {
    for region in regions.iter() {
        if selected == Some(region.kind()) {
            draw_outline(image, region, 2);
            for handle in Handle::ALL {
                let (hx, hy) = handle.position(region);
                draw_handle(image, hx as i64, hy as i64);
            }
        } else {
            draw_outline(image, region, 1);
        }
    }
}

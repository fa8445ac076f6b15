use image::{imageops::FilterType, DynamicImage, ImageBuffer, Pixel, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    compositor::presets::PresetSet,
    error::{CompositeError, Result},
    regions::{FeatureKind, Region, RegionSet},
};

/// How regions that reach past the image edges are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Composite only the part of the region that overlaps the image
    #[default]
    Clip,

    /// Fail with `CompositeError::OutOfBounds`
    Reject,
}

/// Blend one channel: `alpha * src + (1 - alpha) * dst`, truncated
pub fn blend_channel(src: u8, dst: u8, alpha: f32) -> u8 {
    (alpha * src as f32 + (1.0 - alpha) * dst as f32) as u8
}

/// Resize to exactly `(width, height)` with bilinear filtering
fn resize_exact<P>(image: &ImageBuffer<P, Vec<u8>>, width: u32, height: u32) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    image::imageops::resize(image, width, height, FilterType::Triangle)
}

/// Pastes preset images into regions of a photo
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    bounds: BoundsPolicy,
}

impl Compositor {
    pub fn new(bounds: BoundsPolicy) -> Self {
        Self { bounds }
    }

    /// Resize `source` to the region and blend it into `base` in place.
    ///
    /// Returns `Ok(false)` when nothing was written: the region is narrower
    /// or shorter than one pixel, or (under `Clip`) lies entirely outside the
    /// image.
    ///
    /// The preset is resampled to the whole region before clipping, so the
    /// working buffer is `width * height * 4` bytes. Regions edited through
    /// `Handle::apply` or `RegionSet::set_geometry` are capped at
    /// `MAX_REGION_SIZE` on each side.
    pub fn composite_region(&self, base: &mut RgbImage, region: &Region, source: &DynamicImage) -> Result<bool> {
        if region.width < 1 || region.height < 1 {
            debug!("Skipping degenerate region {} ({}x{})", region.name(), region.width, region.height);
            return Ok(false);
        }

        let (image_width, image_height) = base.dimensions();
        let right = region.x as i64 + region.width as i64;
        let bottom = region.y as i64 + region.height as i64;
        let inside = region.x >= 0
            && region.y >= 0
            && right <= image_width as i64
            && bottom <= image_height as i64;

        if !inside && self.bounds == BoundsPolicy::Reject {
            return Err(CompositeError::OutOfBounds {
                region: region.name().to_string(),
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                image_width,
                image_height,
            }.into());
        }

        // Visible part of the region in image coordinates, end exclusive
        let x0 = region.x.max(0) as i64;
        let y0 = region.y.max(0) as i64;
        let x1 = right.min(image_width as i64);
        let y1 = bottom.min(image_height as i64);
        if x0 >= x1 || y0 >= y1 {
            warn!("Region {} lies outside the {}x{} image, skipping", region.name(), image_width, image_height);
            return Ok(false);
        }
        if !inside {
            debug!("Clipping region {} to image bounds", region.name());
        }

        let (width, height) = (region.width as u32, region.height as u32);
        let visible = (x0..x1).flat_map(|x| (y0..y1).map(move |y| (x, y)));

        if source.color().has_alpha() {
            let resized = resize_exact(&source.to_rgba8(), width, height);
            for (x, y) in visible {
                let src = resized.get_pixel((x - region.x as i64) as u32, (y - region.y as i64) as u32);
                let alpha = src[3] as f32 / 255.0;
                let dst = base.get_pixel_mut(x as u32, y as u32);
                for c in 0..3 {
                    dst[c] = blend_channel(src[c], dst[c], alpha);
                }
            }
        } else {
            let resized = resize_exact(&source.to_rgb8(), width, height);
            for (x, y) in visible {
                let src = resized.get_pixel((x - region.x as i64) as u32, (y - region.y as i64) as u32);
                base.put_pixel(x as u32, y as u32, *src);
            }
        }

        Ok(true)
    }

    /// Composite every feature's preset into its region.
    ///
    /// Returns how many regions were written.
    pub fn replace_features(&self, base: &mut RgbImage, regions: &RegionSet, presets: &PresetSet) -> Result<usize> {
        let mut written = 0;
        for kind in FeatureKind::ALL {
            let region = regions.get(kind);
            if self.composite_region(base, region, presets.get(kind))? {
                debug!("Composited {} at ({}, {}) size {}x{}",
                       kind, region.x, region.y, region.width, region.height);
                written += 1;
            }
        }
        Ok(written)
    }
}

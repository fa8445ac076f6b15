use std::path::Path;

use image::{imageops::FilterType, GenericImageView, ImageBuffer, Rgb, RgbImage};
use tracing::debug;

use crate::error::{PhotoError, Result};

/// The photo being edited
///
/// A thin wrapper around an RGB image buffer. Any alpha channel in the
/// decoded file is dropped on load.
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    buffer: RgbImage,
}

impl Photo {
    /// Create a photo from an RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a photo with the given dimensions filled with black
    pub fn new_black(width: u32, height: u32) -> Self {
        let buffer = ImageBuffer::new(width, height);
        Self { buffer }
    }

    /// Create a photo with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| {
            Rgb(color)
        });
        Self { buffer }
    }

    /// Decode a photo from disk (PNG, JPEG, BMP or GIF)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|e| PhotoError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!("Decoded {:?}: {}x{} {:?}", path, decoded.width(), decoded.height(), decoded.color());
        Ok(Self::new(decoded.to_rgb8()))
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.buffer.get_pixel(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(color));
    }

    /// Get a mutable reference to the underlying image buffer
    pub fn as_image_mut(&mut self) -> &mut RgbImage {
        &mut self.buffer
    }

    /// Scaled-down copy whose longer side is at most `max_size`.
    ///
    /// Photos that already fit are returned unscaled.
    pub fn thumbnail(&self, max_size: u32) -> Photo {
        let (width, height) = self.dimensions();
        if width <= max_size && height <= max_size {
            return self.clone();
        }

        let ratio = (max_size as f64 / width as f64).min(max_size as f64 / height as f64);
        let new_width = ((width as f64 * ratio) as u32).max(1);
        let new_height = ((height as f64 * ratio) as u32).max(1);
        Photo::new(image::imageops::resize(&self.buffer, new_width, new_height, FilterType::Lanczos3))
    }

    /// Save the photo; the format follows the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.buffer.save(path).map_err(|e| PhotoError::SaveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

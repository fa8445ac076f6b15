use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::{
    config::PresetConfig,
    error::{PresetError, Result},
    regions::FeatureKind,
};

/// The replacement images, one per feature
///
/// Presets are always held as RGBA so compositing can blend them.
#[derive(Debug, Clone)]
pub struct PresetSet {
    eye_left: DynamicImage,
    eye_right: DynamicImage,
    mouth: DynamicImage,
}

impl PresetSet {
    /// Load all three presets named by the configuration.
    ///
    /// Fails on the first preset that is missing or cannot be decoded.
    pub fn load(config: &PresetConfig) -> Result<Self> {
        let eye_left = Self::load_one(FeatureKind::EyeLeft, &config.path_for(FeatureKind::EyeLeft))?;
        let eye_right = Self::load_one(FeatureKind::EyeRight, &config.path_for(FeatureKind::EyeRight))?;
        let mouth = Self::load_one(FeatureKind::Mouth, &config.path_for(FeatureKind::Mouth))?;

        info!("Loaded presets from {:?}", config.directory);
        Ok(Self { eye_left, eye_right, mouth })
    }

    /// Load a single preset file, converted to RGBA
    pub fn load_one(kind: FeatureKind, path: &Path) -> Result<DynamicImage> {
        if !path.exists() {
            return Err(PresetError::Missing {
                feature: kind.to_string(),
                path: path.display().to_string(),
            }.into());
        }

        let image = image::open(path).map_err(|e| PresetError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(DynamicImage::ImageRgba8(image.to_rgba8()))
    }

    /// Build a preset set from images already in memory
    pub fn from_images(eye_left: DynamicImage, eye_right: DynamicImage, mouth: DynamicImage) -> Self {
        let to_rgba = |image: DynamicImage| DynamicImage::ImageRgba8(image.to_rgba8());
        Self {
            eye_left: to_rgba(eye_left),
            eye_right: to_rgba(eye_right),
            mouth: to_rgba(mouth),
        }
    }

    /// Swap in a new image for one feature
    pub fn set(&mut self, kind: FeatureKind, image: DynamicImage) {
        let image = DynamicImage::ImageRgba8(image.to_rgba8());
        match kind {
            FeatureKind::EyeLeft => self.eye_left = image,
            FeatureKind::EyeRight => self.eye_right = image,
            FeatureKind::Mouth => self.mouth = image,
        }
    }

    pub fn get(&self, kind: FeatureKind) -> &DynamicImage {
        match kind {
            FeatureKind::EyeLeft => &self.eye_left,
            FeatureKind::EyeRight => &self.eye_right,
            FeatureKind::Mouth => &self.mouth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReplacerError;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_presets(dir: &Path, config: &PresetConfig) {
        for kind in FeatureKind::ALL {
            RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 128]))
                .save(dir.join(config.path_for(kind).file_name().unwrap()))
                .unwrap();
        }
    }

    #[test]
    fn test_load_all_presets() {
        let dir = tempdir().unwrap();
        let mut config = PresetConfig::default();
        config.directory = dir.path().to_path_buf();
        write_presets(dir.path(), &config);

        let presets = PresetSet::load(&config).unwrap();
        for kind in FeatureKind::ALL {
            let image = presets.get(kind);
            assert!(image.color().has_alpha());
            assert_eq!(image.to_rgba8().get_pixel(0, 0).0, [10, 20, 30, 128]);
        }
    }

    #[test]
    fn test_missing_preset_is_reported() {
        let dir = tempdir().unwrap();
        let mut config = PresetConfig::default();
        config.directory = dir.path().to_path_buf();
        write_presets(dir.path(), &config);
        std::fs::remove_file(config.path_for(FeatureKind::Mouth)).unwrap();

        match PresetSet::load(&config) {
            Err(ReplacerError::Preset(PresetError::Missing { feature, path })) => {
                assert_eq!(feature, "mouth");
                assert!(path.ends_with("preset_mouth.png"));
            }
            other => panic!("expected missing preset, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_undecodable_preset_is_reported() {
        let dir = tempdir().unwrap();
        let mut config = PresetConfig::default();
        config.directory = dir.path().to_path_buf();
        write_presets(dir.path(), &config);
        std::fs::write(config.path_for(FeatureKind::EyeLeft), b"not an image").unwrap();

        let result = PresetSet::load(&config);
        assert!(matches!(result, Err(ReplacerError::Preset(PresetError::LoadFailed { .. }))));
    }

    #[test]
    fn test_set_replaces_one_preset() {
        let solid = |color| DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba(color)));
        let mut presets = PresetSet::from_images(solid([1, 1, 1, 255]), solid([2, 2, 2, 255]), solid([3, 3, 3, 255]));

        presets.set(FeatureKind::EyeRight, DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([9, 8, 7]))));
        let eye_right = presets.get(FeatureKind::EyeRight);
        assert!(eye_right.color().has_alpha());
        assert_eq!(eye_right.to_rgba8().get_pixel(2, 2).0, [9, 8, 7, 255]);
        assert_eq!(presets.get(FeatureKind::Mouth).to_rgba8().get_pixel(0, 0).0, [3, 3, 3, 255]);
    }

    #[test]
    fn test_rgb_presets_gain_alpha() {
        let rgb = || DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let presets = PresetSet::from_images(rgb(), rgb(), rgb());
        let mouth = presets.get(FeatureKind::Mouth).to_rgba8();
        assert_eq!(mouth.get_pixel(1, 1).0, [1, 2, 3, 255]);
    }
}

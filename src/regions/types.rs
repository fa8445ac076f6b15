use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest width or height a region may be edited down to
pub const MIN_REGION_SIZE: i32 = 10;

/// Largest width or height a region may be edited up to. Compositing
/// resamples the preset to the full region, so this bounds that buffer.
pub const MAX_REGION_SIZE: i32 = 8192;

/// The facial features that can be replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    EyeLeft,
    EyeRight,
    Mouth,
}

impl FeatureKind {
    /// Every feature, in hit-testing and compositing order
    pub const ALL: [FeatureKind; 3] = [FeatureKind::EyeLeft, FeatureKind::EyeRight, FeatureKind::Mouth];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::EyeLeft => "eye_left",
            FeatureKind::EyeRight => "eye_right",
            FeatureKind::Mouth => "mouth",
        }
    }

    /// Outline color used when drawing the region (RGB)
    pub fn color(&self) -> [u8; 3] {
        match self {
            FeatureKind::EyeLeft => [0, 0, 255],
            FeatureKind::EyeRight => [0, 255, 0],
            FeatureKind::Mouth => [255, 0, 0],
        }
    }

    /// Geometry the region starts with on an image of the given size
    pub fn default_region(&self, image_width: u32, image_height: u32) -> Region {
        let (w, h) = (image_width as i32, image_height as i32);
        match self {
            FeatureKind::EyeLeft => Region::new(*self, w / 4, h / 3, 100, 60),
            FeatureKind::EyeRight => Region::new(*self, w * 3 / 4, h / 3, 100, 60),
            FeatureKind::Mouth => Region::new(*self, w / 2, h * 2 / 3, 120, 40),
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown feature: {}", s))
    }
}

/// A named rectangle on the photo that a preset is composited into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    kind: FeatureKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(kind: FeatureKind, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { kind, x, y, width, height }
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the point lies inside the region, edges included
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Move the region without changing its size
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Keep width and height within `MIN_REGION_SIZE..=MAX_REGION_SIZE`.
    /// Position is left alone.
    pub fn clamp_size(&mut self) {
        self.width = self.width.clamp(MIN_REGION_SIZE, MAX_REGION_SIZE);
        self.height = self.height.clamp(MIN_REGION_SIZE, MAX_REGION_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regions_for_400x300() {
        let eye_left = FeatureKind::EyeLeft.default_region(400, 300);
        assert_eq!((eye_left.x, eye_left.y, eye_left.width, eye_left.height), (100, 100, 100, 60));

        let eye_right = FeatureKind::EyeRight.default_region(400, 300);
        assert_eq!((eye_right.x, eye_right.y, eye_right.width, eye_right.height), (300, 100, 100, 60));

        let mouth = FeatureKind::Mouth.default_region(400, 300);
        assert_eq!((mouth.x, mouth.y, mouth.width, mouth.height), (200, 200, 120, 40));
        assert_eq!(mouth.name(), "mouth");
    }

    #[test]
    fn test_feature_names_roundtrip() {
        for kind in FeatureKind::ALL {
            assert_eq!(kind.as_str().parse::<FeatureKind>().unwrap(), kind);
        }
        assert!("nose".parse::<FeatureKind>().is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let region = Region::new(FeatureKind::Mouth, 10, 20, 30, 40);
        assert!(region.contains(10, 20));
        assert!(region.contains(40, 60));
        assert!(!region.contains(41, 60));
        assert!(!region.contains(10, 19));
    }

    #[test]
    fn test_clamp_size_keeps_position() {
        let mut region = Region::new(FeatureKind::EyeLeft, 50, 50, -4, 3);
        region.clamp_size();
        assert_eq!((region.x, region.y, region.width, region.height), (50, 50, 10, 10));

        let mut region = Region::new(FeatureKind::Mouth, 0, 0, 100_000, i32::MAX);
        region.clamp_size();
        assert_eq!((region.width, region.height), (MAX_REGION_SIZE, MAX_REGION_SIZE));
    }

    #[test]
    fn test_edges_saturate_at_extreme_positions() {
        let mut region = Region::new(FeatureKind::Mouth, i32::MAX - 60, i32::MIN + 5, 120, 40);
        assert_eq!(region.right(), i32::MAX);
        assert!(region.contains(i32::MAX, i32::MIN + 10));

        region.translate(i32::MAX, i32::MIN);
        assert_eq!((region.x, region.y), (i32::MAX, i32::MIN));
        assert_eq!(region.bottom(), i32::MIN + 40);
    }
}

use crate::regions::{
    handle::Handle,
    types::{FeatureKind, Region},
};

/// Result of hit-testing a pointer position against the regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A resize handle of the given region
    Handle { region: FeatureKind, handle: Handle },

    /// Inside (or on the edge of) the given region
    Body(FeatureKind),

    Miss,
}

/// The three editable regions, one per feature
///
/// Iteration, hit-testing and compositing all walk the regions in
/// `FeatureKind::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSet {
    regions: [Region; 3],
}

impl RegionSet {
    /// Default layout for an image of the given size
    pub fn for_image(width: u32, height: u32) -> Self {
        Self {
            regions: FeatureKind::ALL.map(|kind| kind.default_region(width, height)),
        }
    }

    fn index(kind: FeatureKind) -> usize {
        match kind {
            FeatureKind::EyeLeft => 0,
            FeatureKind::EyeRight => 1,
            FeatureKind::Mouth => 2,
        }
    }

    pub fn get(&self, kind: FeatureKind) -> &Region {
        &self.regions[Self::index(kind)]
    }

    pub fn get_mut(&mut self, kind: FeatureKind) -> &mut Region {
        &mut self.regions[Self::index(kind)]
    }

    /// Replace the geometry of one region, keeping the size invariant
    pub fn set_geometry(&mut self, kind: FeatureKind, x: i32, y: i32, width: i32, height: i32) {
        let region = self.get_mut(kind);
        *region = Region::new(kind, x, y, width, height);
        region.clamp_size();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Find what lies under the pointer.
    ///
    /// Handles of every region are checked before any region body, so a
    /// handle wins over an overlapping body.
    pub fn hit_test(&self, x: i32, y: i32, tolerance: i32) -> HitTarget {
        for region in &self.regions {
            if let Some(handle) = Handle::ALL
                .into_iter()
                .find(|handle| handle.is_hit(region, x, y, tolerance))
            {
                return HitTarget::Handle { region: region.kind(), handle };
            }
        }

        self.regions
            .iter()
            .find(|region| region.contains(x, y))
            .map(|region| HitTarget::Body(region.kind()))
            .unwrap_or(HitTarget::Miss)
    }
}

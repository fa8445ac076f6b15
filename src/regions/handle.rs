use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::regions::types::Region;

/// One of the eight resize handles on a region's border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl Handle {
    /// Corners first, then edge midpoints
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
        Handle::Top,
        Handle::Bottom,
        Handle::Left,
        Handle::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::TopLeft => "top_left",
            Handle::TopRight => "top_right",
            Handle::BottomLeft => "bottom_left",
            Handle::BottomRight => "bottom_right",
            Handle::Top => "top",
            Handle::Bottom => "bottom",
            Handle::Left => "left",
            Handle::Right => "right",
        }
    }

    /// Where this handle sits on the given region
    pub fn position(&self, region: &Region) -> (i32, i32) {
        let mid_x = region.x.saturating_add(region.width / 2);
        let mid_y = region.y.saturating_add(region.height / 2);
        match self {
            Handle::TopLeft => (region.x, region.y),
            Handle::TopRight => (region.right(), region.y),
            Handle::BottomLeft => (region.x, region.bottom()),
            Handle::BottomRight => (region.right(), region.bottom()),
            Handle::Top => (mid_x, region.y),
            Handle::Bottom => (mid_x, region.bottom()),
            Handle::Left => (region.x, mid_y),
            Handle::Right => (region.right(), mid_y),
        }
    }

    /// Whether `(x, y)` falls in the square of half-width `tolerance` around
    /// this handle (strict on both axes)
    pub fn is_hit(&self, region: &Region, x: i32, y: i32, tolerance: i32) -> bool {
        let (hx, hy) = self.position(region);
        x.saturating_sub(hx).saturating_abs() < tolerance
            && y.saturating_sub(hy).saturating_abs() < tolerance
    }

    /// Move the edges adjacent to this handle by the pointer delta, then clamp
    /// the size. Opposite edges stay put unless the clamp kicks in.
    /// Arithmetic saturates at the `i32` limits.
    pub fn apply(&self, region: &mut Region, dx: i32, dy: i32) {
        let (grow_x, grow_y) = (|v: i32| v.saturating_add(dx), |v: i32| v.saturating_add(dy));
        let (shrink_x, shrink_y) = (|v: i32| v.saturating_sub(dx), |v: i32| v.saturating_sub(dy));
        match self {
            Handle::TopLeft => {
                region.x = grow_x(region.x);
                region.y = grow_y(region.y);
                region.width = shrink_x(region.width);
                region.height = shrink_y(region.height);
            }
            Handle::TopRight => {
                region.y = grow_y(region.y);
                region.width = grow_x(region.width);
                region.height = shrink_y(region.height);
            }
            Handle::BottomLeft => {
                region.x = grow_x(region.x);
                region.width = shrink_x(region.width);
                region.height = grow_y(region.height);
            }
            Handle::BottomRight => {
                region.width = grow_x(region.width);
                region.height = grow_y(region.height);
            }
            Handle::Top => {
                region.y = grow_y(region.y);
                region.height = shrink_y(region.height);
            }
            Handle::Bottom => {
                region.height = grow_y(region.height);
            }
            Handle::Left => {
                region.x = grow_x(region.x);
                region.width = shrink_x(region.width);
            }
            Handle::Right => {
                region.width = grow_x(region.width);
            }
        }
        region.clamp_size();
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Handle::ALL
            .into_iter()
            .find(|handle| handle.as_str() == s)
            .ok_or_else(|| format!("unknown handle: {}", s))
    }
}

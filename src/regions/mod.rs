//! # Editable Region Model
//!
//! The three named rectangles (`eye_left`, `eye_right`, `mouth`) placed over
//! the photo, their eight resize handles, and hit-testing of pointer
//! positions against them.

pub mod handle;
pub mod model;
pub mod types;

pub use handle::Handle;
pub use model::{HitTarget, RegionSet};
pub use types::{FeatureKind, Region, MAX_REGION_SIZE, MIN_REGION_SIZE};

//! # Compositor
//!
//! Loads the preset feature images and pastes them into the regions of a
//! photo: each preset is resized to its region with bilinear filtering and
//! alpha-blended over the pixels underneath.

pub mod blend;
pub mod presets;

pub use blend::{blend_channel, BoundsPolicy, Compositor};
pub use presets::PresetSet;

//! # Face Replacer
//!
//! Place three regions (`eye_left`, `eye_right`, `mouth`) over a photo, move
//! and resize them with the pointer, then paste preset images into them with
//! alpha blending and write the result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use face_replacer::{
//!     config::Config,
//!     session::{EditorSession, PointerEvent},
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let mut session = EditorSession::from_config(&config)?;
//! session.load_image("photo.jpg")?;
//!
//! // Drag the mouth's bottom-right handle
//! session.handle_event(PointerEvent::Press { x: 320, y: 240 });
//! session.handle_event(PointerEvent::Move { x: 330, y: 245 });
//! session.handle_event(PointerEvent::Release);
//!
//! session.save_result("output.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`regions`] - Region geometry, resize handles and hit-testing
//! - [`compositor`] - Preset loading, resizing and alpha blending
//! - [`session`] - Pointer handling, overlay rendering and saving
//! - [`photo`] - The RGB image being edited
//! - [`config`] - Configuration management

pub mod compositor;
pub mod config;
pub mod error;
pub mod photo;
pub mod regions;
pub mod session;

// Re-export commonly used types for convenience
pub use crate::{
    compositor::{Compositor, PresetSet},
    config::Config,
    error::{ReplacerError, Result},
    photo::Photo,
    regions::{FeatureKind, Handle, Region, RegionSet},
    session::EditorSession,
};

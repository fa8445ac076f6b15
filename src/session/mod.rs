//! # Editing Session
//!
//! Owns the photo, the regions and the pointer state, and turns press / move /
//! release events into drags and resizes. Compositing and saving are driven
//! from here as well.
//!
//! ```rust,no_run
//! use face_replacer::{config::Config, session::{EditorSession, GestureScript}};
//!
//! # fn main() -> face_replacer::Result<()> {
//! let config = Config::default();
//! let mut session = EditorSession::from_config(&config)?;
//! session.load_image("portrait.jpg")?;
//! session.replay(&GestureScript::drag((320, 240), &[(330, 245)]));
//! session.save_result(&config.output.path)?;
//! # Ok(())
//! # }
//! ```

pub mod editor;
pub mod overlay;
pub mod script;

pub use editor::{EditorSession, Gesture};
pub use script::{GestureScript, PointerEvent};

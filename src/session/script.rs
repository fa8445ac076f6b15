use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// A pointer event fed into the editor, in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PointerEvent {
    Press { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Release,

    /// Pointer left the canvas; ends any drag like a release
    Leave,
}

/// A recorded sequence of pointer events
///
/// ```toml
/// [[gesture]]
/// action = "press"
/// x = 320
/// y = 240
///
/// [[gesture]]
/// action = "move"
/// x = 330
/// y = 245
///
/// [[gesture]]
/// action = "release"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureScript {
    #[serde(default, rename = "gesture")]
    pub events: Vec<PointerEvent>,
}

impl GestureScript {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|reason| {
            SessionError::ScriptParseFailed {
                path: path.display().to_string(),
                reason,
            }
            .into()
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// A press, one move per point, and a release
    pub fn drag(from: (i32, i32), through: &[(i32, i32)]) -> Self {
        let mut events = vec![PointerEvent::Press { x: from.0, y: from.1 }];
        events.extend(through.iter().map(|&(x, y)| PointerEvent::Move { x, y }));
        events.push(PointerEvent::Release);
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

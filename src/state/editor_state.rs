//! The tool state machine of the drawing editor.
//!
//! A gesture is one press, any number of moves, and one release. Between the
//! press and the release the editor is `Dragging`; otherwise it is `Idle`.
//!
//! ```text
//!              press                 release
//! ┌──────────┐ ──────► ┌──────────┐ ────────► ┌──────────┐
//! │   Idle   │         │ Dragging │           │   Idle   │
//! └──────────┘         └────┬─────┘           └──────────┘
//!                           │ ▲
//!                           └─┘ move
//! ```
//!
//! The tool is frozen at press time: switching tools while dragging only
//! affects the next gesture.
use egui::Pos2;
use log::debug;

use crate::error::TransitionError;
use crate::id_generator::PrimitiveId;
use crate::primitive::Style;
use crate::tools::ToolKind;

/// Transient data of the gesture in progress
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    /// Tool active when the gesture started
    pub tool: ToolKind,
    /// Press position; shapes span from here to the pointer
    pub anchor: Pos2,
    /// Position of the previous pointer event
    pub last: Pos2,
    /// Style captured at press time, when the style policy asks for it
    pub style: Option<Style>,
    /// Primitives committed so far; becomes one action on release
    committed: Vec<PrimitiveId>,
}

impl Gesture {
    pub fn new(tool: ToolKind, anchor: Pos2, style: Option<Style>) -> Self {
        Self {
            tool,
            anchor,
            last: anchor,
            style,
            committed: Vec::new(),
        }
    }

    pub fn record(&mut self, id: PrimitiveId) {
        self.committed.push(id);
    }

    pub fn into_committed(self) -> Vec<PrimitiveId> {
        self.committed
    }
}

/// The possible states of the editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer is held down
    Dragging(Gesture),
}

impl EditorState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
        }
    }

    /// Idle → Dragging. Fails if a gesture is already running.
    pub fn begin(&mut self, gesture: Gesture) -> Result<(), TransitionError> {
        if let Self::Dragging(_) = self {
            return Err(TransitionError::InvalidStateTransition {
                event: "press",
                state: self.name(),
            });
        }
        debug!("Gesture started with {} at {:?}", gesture.tool.label(), gesture.anchor);
        *self = Self::Dragging(gesture);
        Ok(())
    }

    /// The running gesture, if any.
    pub fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        match self {
            Self::Dragging(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            Self::Dragging(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    /// Dragging → Idle, handing back the finished gesture.
    pub fn finish(&mut self) -> Result<Gesture, TransitionError> {
        match std::mem::take(self) {
            Self::Dragging(gesture) => Ok(gesture),
            Self::Idle => Err(TransitionError::InvalidStateTransition {
                event: "release",
                state: "idle",
            }),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Tool of the running gesture
    pub fn active_tool(&self) -> Option<ToolKind> {
        self.gesture().map(|gesture| gesture.tool)
    }
}
